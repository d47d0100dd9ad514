use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dsverify",
    version,
    about = "Verify downloaded datasets for the vehicle recognition project"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        value_enum,
        default_value_t = DatasetArg::All,
        help = "Specify which dataset to verify"
    )]
    pub dataset: DatasetArg,
    #[arg(
        long,
        help = "Base directory for data storage (default: current directory)"
    )]
    pub base_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum DatasetArg {
    IndianVehicle,
    MilitaryVehicles,
    MilitaryAssets,
    All,
}

impl DatasetArg {
    /// Registry key for a single-dataset run; `None` means verify everything.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            DatasetArg::IndianVehicle => Some("indian_vehicle"),
            DatasetArg::MilitaryVehicles => Some("military_vehicles"),
            DatasetArg::MilitaryAssets => Some("military_assets"),
            DatasetArg::All => None,
        }
    }
}
