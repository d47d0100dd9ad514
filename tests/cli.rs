use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn missing_directory_reports_failure() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--dataset", "military_vehicles"])
        .assert()
        .code(1)
        .stdout(contains("Directory not found"));
}

#[test]
fn seeded_dataset_passes_with_warnings() {
    let env = TestEnv::new();
    env.seed_dataset("military_vehicles", &[(".jpg", 3)]);
    env.cmd()
        .args(["--dataset", "military_vehicles"])
        .assert()
        .success()
        .stdout(contains("✓ Total files: 3"))
        .stdout(contains("⚠ Verification PASSED with warnings"));
}

#[test]
fn full_run_prints_summary() {
    let env = TestEnv::new();
    env.seed_dataset("indian_vehicle", &[(".jpg", 2)]);
    env.seed_dataset("military_vehicles", &[(".png", 2)]);
    env.seed_dataset("military_assets", &[(".txt", 2)]);
    env.cmd()
        .assert()
        .success()
        .stdout(contains("DATA VERIFICATION REPORT"))
        .stdout(contains("VERIFICATION SUMMARY"))
        .stdout(contains("Total Datasets: 3"))
        .stdout(contains("Total Files: 6"))
        .stdout(contains("⚠ Overall Status: PASSED with warnings"));
}

#[test]
fn extension_breakdown_is_sorted_by_count() {
    let env = TestEnv::new();
    env.seed_dataset("military_assets", &[(".jpg", 5), (".txt", 2), ("", 1)]);
    env.cmd()
        .args(["--dataset", "military_assets"])
        .assert()
        .success()
        .stdout(contains("  .jpg: 5\n  .txt: 2\n  (no extension): 1"));
}

#[test]
fn rejects_unknown_dataset_value() {
    let env = TestEnv::new();
    env.cmd().args(["--dataset", "street_signs"]).assert().failure();
}
