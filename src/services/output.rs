use crate::domain::models::{AggregateReport, JsonOut, Status, VerificationResult};
use crate::services::registry;
use serde::Serialize;
use std::path::Path;

const BANNER: &str =
    "======================================================================";

pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Render a count with thousands separators, e.g. 50000 -> "50,000".
pub fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn print_report_header(base_dir: &Path, data_dir: &Path) {
    println!();
    println!("{BANNER}");
    println!("DATA VERIFICATION REPORT");
    println!("{BANNER}");
    println!("Base Directory: {}", base_dir.display());
    println!("Data Directory: {}", data_dir.display());
}

/// Narrate one dataset's checks from its finished result.
pub fn print_verification(result: &VerificationResult) {
    println!();
    println!("{BANNER}");
    println!("VERIFYING: {}", result.name);
    println!("{BANNER}");

    if !result.exists {
        for issue in &result.issues {
            println!("✗ {issue}");
        }
        return;
    }

    println!("✓ Directory exists");
    println!("✓ Total files: {}", fmt_count(result.file_count));

    // The registry lookup cannot fail here: the result came out of it.
    if let Ok(spec) = registry::find(&result.dataset) {
        if result.file_count < spec.min_file_count {
            println!(
                "⚠ File count ({}) below expected minimum ({})",
                fmt_count(result.file_count),
                fmt_count(spec.min_file_count)
            );
        } else {
            println!("✓ File count meets minimum requirement");
        }
    }

    println!();
    println!("File types found:");
    let mut entries: Vec<(&String, &u64)> = result.file_types.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (ext, count) in entries {
        let label = if ext.is_empty() {
            "(no extension)"
        } else {
            ext.as_str()
        };
        println!("  {label}: {}", fmt_count(*count));
    }

    if result
        .issues
        .iter()
        .any(|i| i.starts_with("No expected file formats found"))
    {
        println!("✗ No expected file formats found");
    } else {
        println!("✓ Expected file formats found");
    }

    if result.issues.iter().any(|i| i == "Metadata file is corrupted") {
        println!("✗ Metadata file is corrupted");
    } else if let Some(issue) = result
        .issues
        .iter()
        .find(|i| i.starts_with("Metadata file not found"))
    {
        println!("⚠ {issue}");
    } else {
        println!("✓ Metadata is valid JSON");
        println!(
            "  Download date: {}",
            result.download_date.as_deref().unwrap_or("Unknown")
        );
    }

    println!();
    match result.status {
        Status::Passed => println!("✓ Verification PASSED"),
        Status::Warning => println!("⚠ Verification PASSED with warnings"),
        _ => println!("✗ Verification FAILED"),
    }
}

pub fn print_summary(report: &AggregateReport) {
    println!();
    println!("{BANNER}");
    println!("VERIFICATION SUMMARY");
    println!("{BANNER}");

    for result in &report.results {
        println!("{} {}: {}", result.status.symbol(), result.name, result.status);
        println!("  Files: {}", fmt_count(result.file_count));
        if !result.issues.is_empty() {
            println!("  Issues: {}", result.issues.len());
            for issue in &result.issues {
                println!("    - {issue}");
            }
        }
    }

    println!();
    println!("Total Datasets: {}", report.results.len());
    println!("Passed: {}", report.passed);
    println!("Warnings: {}", report.warnings);
    println!("Failed: {}", report.failed);
    println!("Total Files: {}", fmt_count(report.total_files));
    println!();

    if report.failed > 0 {
        println!("✗ Overall Status: FAILED");
    } else if report.warnings > 0 {
        println!("⚠ Overall Status: PASSED with warnings");
    } else {
        println!("✓ Overall Status: ALL CHECKS PASSED");
    }
}
