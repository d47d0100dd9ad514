use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One registry entry describing what a downloaded dataset should look like.
#[derive(Debug, Clone, Copy)]
pub struct DatasetSpec {
    pub key: &'static str,
    pub display_name: &'static str,
    pub min_file_count: u64,
    /// Lowercase extensions including the leading dot, e.g. ".jpg".
    pub expected_extensions: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Passed,
    Warning,
    Failed,
    Unknown,
}

impl Status {
    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Passed => "✓",
            Status::Warning => "⚠",
            Status::Failed => "✗",
            Status::Unknown => "?",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Passed => "PASSED",
            Status::Warning => "WARNING",
            Status::Failed => "FAILED",
            Status::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Serialize)]
pub struct VerificationResult {
    pub dataset: String,
    pub name: String,
    pub exists: bool,
    pub file_count: u64,
    /// Extension histogram; the empty-string key holds extensionless files.
    pub file_types: BTreeMap<String, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_date: Option<String>,
    pub issues: Vec<String>,
    pub status: Status,
}

impl VerificationResult {
    pub fn new(spec: &DatasetSpec) -> Self {
        Self {
            dataset: spec.key.to_string(),
            name: spec.display_name.to_string(),
            exists: false,
            file_count: 0,
            file_types: BTreeMap::new(),
            download_date: None,
            issues: Vec::new(),
            status: Status::Unknown,
        }
    }
}

#[derive(Serialize)]
pub struct AggregateReport {
    pub results: Vec<VerificationResult>,
    pub total_files: u64,
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub overall_success: bool,
}
