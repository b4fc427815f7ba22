//! Read-transform-write pipeline over the discovered file tree.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, SyllabifyError};
use crate::hyphenator::{HyphenationDictionary, StandardDictionary, Syllabifier};
use crate::report::{FileOutcome, FileStatus, RunReport};
use crate::walker::{discover_files, DiscoveredFile};

/// Progress notifications emitted while a run is in flight.
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// Discovery finished; `count` files will be visited.
    Discovered { count: usize },

    /// One file reached its final state.
    Finished(&'a FileOutcome),
}

/// Mirrors the scan root into the output folder with syllables marked.
pub struct Rewriter<D: HyphenationDictionary> {
    config: Config,
    syllabifier: Syllabifier<D>,
}

impl Rewriter<StandardDictionary> {
    /// Validate `config` and load its hyphenation dictionary.
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let syllabifier = Syllabifier::from_config(&config)?;
        Ok(Self {
            config,
            syllabifier,
        })
    }
}

impl<D: HyphenationDictionary> Rewriter<D> {
    /// Create a rewriter around any dictionary, using the configured separator.
    pub fn new(config: Config, dictionary: D) -> Result<Self> {
        config.validate()?;
        let syllabifier = Syllabifier::new(dictionary, config.separator);
        Ok(Self {
            config,
            syllabifier,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read one file, syllabify it and write the mirrored copy.
    ///
    /// # Returns
    /// The destination path that was written.
    pub fn rewrite_file(&self, file: &DiscoveredFile) -> Result<PathBuf> {
        let bytes = fs::read(&file.source).map_err(|source| SyllabifyError::Read {
            path: file.source.clone(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|source| SyllabifyError::Decode {
            path: file.source.clone(),
            source,
        })?;

        let transformed = self.syllabifier.syllabify_text(&content);

        let destination = file.destination(&self.config);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|source| SyllabifyError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        write_atomic(&destination, transformed.as_bytes()).map_err(|source| {
            SyllabifyError::Write {
                path: destination.clone(),
                source,
            }
        })?;

        Ok(destination)
    }

    /// Run one file through its state machine: skip, succeed or fail.
    pub fn process_file(&self, file: DiscoveredFile) -> FileOutcome {
        if file.is_in_output(&self.config.output_folder) {
            tracing::debug!(path = %file.relative.display(), "Skipping generated file");
            return FileOutcome {
                file,
                status: FileStatus::Skipped,
            };
        }

        let status = match self.rewrite_file(&file) {
            Ok(destination) => {
                tracing::debug!(
                    path = %file.relative.display(),
                    destination = %destination.display(),
                    "Syllabified file"
                );
                FileStatus::Succeeded { destination }
            }
            Err(error) => {
                tracing::debug!(
                    path = %file.source.display(),
                    error = %error,
                    "Failed to process file"
                );
                FileStatus::Failed { error }
            }
        };

        FileOutcome { file, status }
    }

    /// Process every discovered file, reporting progress to `observer`.
    ///
    /// Per-file failures are recorded in the report and never stop the run.
    ///
    /// # Errors
    /// Only discovery errors are returned.
    pub fn process_files_with<F>(&self, mut observer: F) -> Result<RunReport>
    where
        F: FnMut(RunEvent<'_>),
    {
        let files = discover_files(&self.config)?;
        observer(RunEvent::Discovered { count: files.len() });

        let mut report = RunReport {
            outcomes: Vec::with_capacity(files.len()),
        };
        for file in files {
            let outcome = self.process_file(file);
            observer(RunEvent::Finished(&outcome));
            report.outcomes.push(outcome);
        }

        tracing::info!(
            processed = report.processed_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count(),
            "Run complete"
        );

        Ok(report)
    }

    /// Process every discovered file without progress reporting.
    pub fn process_files(&self) -> Result<RunReport> {
        self.process_files_with(|_| {})
    }
}

/// Run the full pipeline with the standard dictionary for `config`.
pub fn process_files(config: Config) -> Result<RunReport> {
    Rewriter::from_config(config)?.process_files()
}

/// Write `content` to `path` through a sibling temp file and a rename,
/// replacing any existing file.
fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    let written = (|| {
        let mut file = File::create(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()
    })();
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&temp_path);
    })
}
