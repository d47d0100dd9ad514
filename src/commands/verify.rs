use crate::cli::Cli;
use crate::domain::models::Status;
use crate::services::verifier::Verifier;
use crate::services::{output, report};

/// Run verification per the CLI selection and render the report. Returns
/// whether the run counts as successful (drives the process exit code).
pub fn handle_verify(cli: &Cli) -> anyhow::Result<bool> {
    let base_dir = match &cli.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let verifier = Verifier::new(&base_dir);

    match cli.dataset.key() {
        Some(key) => {
            let result = verifier.verify_dataset(key)?;
            let success = matches!(result.status, Status::Passed | Status::Warning);
            if cli.json {
                output::print_json(&result)?;
            } else {
                output::print_verification(&result);
            }
            Ok(success)
        }
        None => {
            let report = report::verify_all(&verifier)?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_report_header(&base_dir, verifier.data_dir());
                for result in &report.results {
                    output::print_verification(result);
                }
                output::print_summary(&report);
            }
            Ok(report.overall_success)
        }
    }
}
