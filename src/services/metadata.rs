use serde_json::Value;
use std::path::{Path, PathBuf};

pub enum MetadataCheck {
    Missing { path: PathBuf },
    Corrupted,
    Valid { download_date: Option<String> },
}

/// Inspect the sidecar metadata file for a dataset. A missing or unparseable
/// file is a finding, not an error; only I/O failures on an existing file
/// propagate.
pub fn check(metadata_dir: &Path, key: &str) -> anyhow::Result<MetadataCheck> {
    let path = metadata_dir.join(format!("{key}_metadata.json"));
    if !path.exists() {
        return Ok(MetadataCheck::Missing { path });
    }
    let raw = std::fs::read_to_string(&path)?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(doc) => Ok(MetadataCheck::Valid {
            download_date: doc
                .get("download_date")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        }),
        Err(_) => Ok(MetadataCheck::Corrupted),
    }
}
