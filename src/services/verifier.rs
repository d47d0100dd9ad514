use crate::domain::models::{Status, VerificationResult};
use crate::services::metadata::{self, MetadataCheck};
use crate::services::output::fmt_count;
use crate::services::registry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct Verifier {
    data_dir: PathBuf,
    metadata_dir: PathBuf,
}

impl Verifier {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            data_dir: base_dir.join("data").join("raw"),
            metadata_dir: base_dir.join("data").join("metadata"),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Run every check for one dataset. Only an unregistered key or an
    /// unexpected I/O failure returns `Err`; every other finding lands in
    /// `issues` and degrades the status instead of aborting.
    pub fn verify_dataset(&self, key: &str) -> anyhow::Result<VerificationResult> {
        let spec = registry::find(key)?;
        let dataset_path = self.data_dir.join(spec.key);
        let mut result = VerificationResult::new(spec);

        if !dataset_path.exists() {
            result.issues.push(format!(
                "Directory not found: {}",
                dataset_path.display()
            ));
            result.status = Status::Failed;
            return Ok(result);
        }
        result.exists = true;

        let (total, file_types) = count_files(&dataset_path)?;
        result.file_count = total;
        result.file_types = file_types;

        if total < spec.min_file_count {
            result.issues.push(format!(
                "File count ({}) below expected minimum ({})",
                fmt_count(total),
                fmt_count(spec.min_file_count)
            ));
        }

        let expected_found = spec
            .expected_extensions
            .iter()
            .any(|ext| result.file_types.contains_key(*ext));
        if !expected_found {
            result.issues.push(format!(
                "No expected file formats found: {}",
                spec.expected_extensions.join(", ")
            ));
        }

        match metadata::check(&self.metadata_dir, spec.key)? {
            MetadataCheck::Missing { path } => {
                result
                    .issues
                    .push(format!("Metadata file not found: {}", path.display()));
            }
            MetadataCheck::Corrupted => {
                result.issues.push("Metadata file is corrupted".to_string());
            }
            MetadataCheck::Valid { download_date } => {
                result.download_date = download_date;
            }
        }

        result.status = if result.issues.is_empty() {
            Status::Passed
        } else if result.file_count > 0 {
            Status::Warning
        } else {
            Status::Failed
        };

        Ok(result)
    }
}

/// Recursively count regular files under `dir`, bucketed by lowercased
/// extension. Extensionless files land in the empty-string bucket. Symlinks
/// are followed, so only entries the filesystem resolves to regular files
/// count.
fn count_files(dir: &Path) -> anyhow::Result<(u64, BTreeMap<String, u64>)> {
    let mut file_types = BTreeMap::new();
    let mut total = 0u64;
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        total += 1;
        *file_types.entry(extension_bucket(entry.path())).or_insert(0) += 1;
    }
    Ok((total, file_types))
}

fn extension_bucket(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}
