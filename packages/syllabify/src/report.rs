//! Per-file outcomes and the aggregated run report.

use std::path::PathBuf;

use crate::error::SyllabifyError;
use crate::walker::DiscoveredFile;

/// Terminal state of one discovered file.
#[derive(Debug)]
pub enum FileStatus {
    /// File lies inside the output folder and was not read.
    Skipped,

    /// Transformed copy written to `destination`.
    Succeeded { destination: PathBuf },

    /// Read, decode or write failed; the run continued.
    Failed { error: SyllabifyError },
}

/// A discovered file together with what happened to it.
#[derive(Debug)]
pub struct FileOutcome {
    pub file: DiscoveredFile,
    pub status: FileStatus,
}

impl FileOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Succeeded { .. })
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self.status, FileStatus::Failed { .. })
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self.status, FileStatus::Skipped)
    }
}

/// Result of a full run, one outcome per discovered file in walk order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    /// Number of files found by the scan, including skipped ones.
    #[must_use]
    pub fn discovered_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of files written successfully.
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    /// Failed files with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&DiscoveredFile, &SyllabifyError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            FileStatus::Failed { error } => Some((&o.file, error)),
            _ => None,
        })
    }

    /// Destinations written during the run.
    pub fn destinations(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            FileStatus::Succeeded { destination } => Some(destination),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(rel: &str, status: FileStatus) -> FileOutcome {
        FileOutcome {
            file: DiscoveredFile {
                source: PathBuf::from(rel),
                relative: PathBuf::from(rel),
            },
            status,
        }
    }

    fn sample_report() -> RunReport {
        RunReport {
            outcomes: vec![
                outcome(
                    "a.txt",
                    FileStatus::Succeeded {
                        destination: PathBuf::from("out/a.txt"),
                    },
                ),
                outcome("out/a.txt", FileStatus::Skipped),
                outcome(
                    "bad.txt",
                    FileStatus::Failed {
                        error: SyllabifyError::Read {
                            path: PathBuf::from("bad.txt"),
                            source: std::io::Error::new(
                                std::io::ErrorKind::PermissionDenied,
                                "denied",
                            ),
                        },
                    },
                ),
            ],
        }
    }

    #[test]
    fn test_counts() {
        let report = sample_report();
        assert_eq!(report.discovered_count(), 3);
        assert_eq!(report.processed_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn test_failures_and_destinations() {
        let report = sample_report();
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0.relative, PathBuf::from("bad.txt"));

        let destinations: Vec<_> = report.destinations().collect();
        assert_eq!(destinations, vec![&PathBuf::from("out/a.txt")]);
    }

    #[test]
    fn test_empty_report() {
        let report = RunReport::default();
        assert_eq!(report.discovered_count(), 0);
        assert_eq!(report.processed_count(), 0);
    }
}
