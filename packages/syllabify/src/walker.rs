//! Discovery of input files under the scan root.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{Result, SyllabifyError};

/// A file found during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path as produced by the walk (root joined with `relative`).
    pub source: PathBuf,

    /// Path relative to the scan root.
    pub relative: PathBuf,
}

impl DiscoveredFile {
    /// Whether the file lives inside the output folder.
    ///
    /// Compares whole path components, so `syllabified_txt_old/a.txt` is
    /// not considered output of `syllabified_txt`.
    #[must_use]
    pub fn is_in_output(&self, output_folder: &str) -> bool {
        self.relative.starts_with(output_folder)
    }

    /// Where the transformed copy of this file is written.
    #[must_use]
    pub fn destination(&self, config: &Config) -> PathBuf {
        config.output_root().join(&self.relative)
    }

    /// Destination relative to the scan root, for display.
    #[must_use]
    pub fn display_destination(&self, config: &Config) -> PathBuf {
        Path::new(&config.output_folder).join(&self.relative)
    }
}

/// Hidden entries (dot-prefixed) below the root are not scanned.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && is_hidden_name(entry.path())
}

fn is_hidden_name(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}

/// A symlink whose target does not exist.
fn is_dangling_link(error: &walkdir::Error) -> bool {
    error.depth() > 0
        && error
            .io_error()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
        && error.path().is_some_and(Path::is_symlink)
}

/// Recursively find every file with the configured extension.
///
/// Symlinks are followed, so linked files and directories are scanned under
/// the link's own path. A symlink loop is skipped. A dangling link with the
/// extension is still returned so that reading it fails for that file alone.
///
/// Files inside the output folder are included; callers decide whether to
/// skip them. Order follows the directory walk and is not sorted.
///
/// # Errors
/// Any other traversal error (unreadable root or subdirectory) aborts
/// discovery.
pub fn discover_files(config: &Config) -> Result<Vec<DiscoveredFile>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(&config.root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let source = match entry {
            Ok(entry) if entry.file_type().is_file() => entry.into_path(),
            Ok(_) => continue,
            Err(error) if error.loop_ancestor().is_some() => {
                tracing::debug!(path = ?error.path(), "Skipping symlink loop");
                continue;
            }
            Err(error) if is_dangling_link(&error) => match error.path() {
                Some(path) if !is_hidden_name(path) => path.to_path_buf(),
                _ => continue,
            },
            Err(source) => {
                return Err(SyllabifyError::Walk {
                    root: config.root.clone(),
                    source,
                })
            }
        };

        if !has_extension(&source, &config.extension) {
            continue;
        }

        let relative = source
            .strip_prefix(&config.root)
            .map_or_else(|_| source.clone(), Path::to_path_buf);

        files.push(DiscoveredFile { source, relative });
    }

    tracing::debug!(root = %config.root.display(), count = files.len(), "Discovered files");

    Ok(files)
}
