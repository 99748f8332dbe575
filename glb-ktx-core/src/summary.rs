//! Per-file outcomes and batch totals

use crate::format::savings_percent;
use crate::scan::Candidate;
use serde::Serialize;
use std::path::PathBuf;

/// Result of converting one model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    pub file_name: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub original_bytes: u64,
    /// Size of the produced file, `None` when the conversion failed
    pub compressed_bytes: Option<u64>,
    /// Failure message, `None` when the conversion succeeded
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn converted(candidate: Candidate, original_bytes: u64, compressed_bytes: u64) -> Self {
        Self {
            file_name: candidate.file_name,
            input_path: candidate.input_path,
            output_path: candidate.output_path,
            original_bytes,
            compressed_bytes: Some(compressed_bytes),
            error: None,
        }
    }

    pub fn failed(candidate: Candidate, original_bytes: u64, error: impl Into<String>) -> Self {
        Self {
            file_name: candidate.file_name,
            input_path: candidate.input_path,
            output_path: candidate.output_path,
            original_bytes,
            compressed_bytes: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn savings_percent(&self) -> Option<f64> {
        self.compressed_bytes
            .and_then(|compressed| savings_percent(self.original_bytes, compressed))
    }
}

/// Everything that happened during one batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub files: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn succeeded(&self) -> usize {
        self.successes().count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// Original size of every candidate, converted or not
    pub fn total_original_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.original_bytes).sum()
    }

    /// Original size of the files that converted successfully
    pub fn converted_original_bytes(&self) -> u64 {
        self.successes().map(|f| f.original_bytes).sum()
    }

    /// Output size of the files that converted successfully
    pub fn converted_compressed_bytes(&self) -> u64 {
        self.successes().filter_map(|f| f.compressed_bytes).sum()
    }

    /// Bytes saved across successful conversions, negative if outputs grew
    pub fn saved_bytes(&self) -> i64 {
        self.converted_original_bytes() as i64 - self.converted_compressed_bytes() as i64
    }

    /// Savings over the successful conversions only
    pub fn total_savings_percent(&self) -> Option<f64> {
        savings_percent(
            self.converted_original_bytes(),
            self.converted_compressed_bytes(),
        )
    }

    fn successes(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn candidate(name: &str) -> Candidate {
        Candidate::new(Path::new("assets"), name)
    }

    #[test]
    fn test_totals_ignore_failed_files() {
        let mut summary = BatchSummary::default();
        summary.push(FileOutcome::converted(candidate("a.glb"), 1000, 200));
        summary.push(FileOutcome::failed(candidate("b.glb"), 3000, "Command failed"));

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.total_original_bytes(), 4000);
        assert_eq!(summary.converted_original_bytes(), 1000);
        assert_eq!(summary.converted_compressed_bytes(), 200);
        assert_eq!(summary.saved_bytes(), 800);
        assert_eq!(summary.total_savings_percent(), Some(80.0));
    }

    #[test]
    fn test_empty_summary() {
        let summary = BatchSummary::default();
        assert_eq!(summary.succeeded(), 0);
        assert_eq!(summary.total_savings_percent(), None);
    }

    #[test]
    fn test_outcome_savings() {
        let ok = FileOutcome::converted(candidate("a.glb"), 1000, 250);
        assert!(ok.is_success());
        assert_eq!(ok.savings_percent(), Some(75.0));

        let failed = FileOutcome::failed(candidate("a.glb"), 1000, "nope");
        assert!(!failed.is_success());
        assert_eq!(failed.savings_percent(), None);
    }
}
