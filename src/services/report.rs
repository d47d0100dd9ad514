use crate::domain::constants::DATASETS;
use crate::domain::models::{AggregateReport, Status, VerificationResult};
use crate::services::verifier::Verifier;

/// Verify every registered dataset in registry order. The first unexpected
/// error aborts the remaining iteration (fail-fast, no per-dataset
/// isolation).
pub fn verify_all(verifier: &Verifier) -> anyhow::Result<AggregateReport> {
    let mut results = Vec::with_capacity(DATASETS.len());
    for spec in DATASETS {
        results.push(verifier.verify_dataset(spec.key)?);
    }
    Ok(build_report(results))
}

pub fn build_report(results: Vec<VerificationResult>) -> AggregateReport {
    let total_files = results.iter().map(|r| r.file_count).sum();
    let passed = results.iter().filter(|r| r.status == Status::Passed).count();
    let warnings = results
        .iter()
        .filter(|r| r.status == Status::Warning)
        .count();
    let failed = results.iter().filter(|r| r.status == Status::Failed).count();
    AggregateReport {
        overall_success: failed == 0,
        results,
        total_files,
        passed,
        warnings,
        failed,
    }
}
