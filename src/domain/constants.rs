use crate::domain::models::DatasetSpec;

/// The dataset registry. Fixed at compile time; iteration order is the
/// reporting order.
pub const DATASETS: &[DatasetSpec] = &[
    DatasetSpec {
        key: "indian_vehicle",
        display_name: "Indian Vehicle Dataset",
        min_file_count: 50_000,
        expected_extensions: &[".jpg", ".jpeg", ".png", ".xml", ".txt"],
    },
    DatasetSpec {
        key: "military_vehicles",
        display_name: "Military Vehicles Dataset",
        min_file_count: 1_000,
        expected_extensions: &[".jpg", ".jpeg", ".png", ".txt"],
    },
    DatasetSpec {
        key: "military_assets",
        display_name: "Military Assets Dataset",
        min_file_count: 15_000,
        expected_extensions: &[".jpg", ".jpeg", ".png", ".txt", ".yaml"],
    },
];
