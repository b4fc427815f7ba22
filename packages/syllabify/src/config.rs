//! Configuration constants and validation functions for syllabify-txt.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SyllabifyError};

/// Folder (relative to the scan root) that receives the mirrored output tree.
pub const OUTPUT_FOLDER: &str = "syllabified_txt";

/// Mark inserted at syllable boundaries (MIDDLE DOT).
pub const SEPARATOR: char = '\u{00B7}';

/// Boundary marker produced by the hyphenation dictionary.
pub const NATIVE_HYPHEN: char = '-';

/// Dictionary language used when none is configured.
pub const LANGUAGE_TAG: &str = "en-US";

/// Extension of the files picked up by the scan.
pub const FILE_EXTENSION: &str = "txt";

/// Extension pattern: a short alphanumeric suffix without the leading dot.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EXTENSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,16}$").expect("valid regex"));

/// Language tag pattern: primary subtag plus optional subtags (e.g. `en-US`, `de-1996`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LANGUAGE_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("valid regex"));

/// Validate the separator mark.
///
/// The separator must be visible and must differ from the native hyphen,
/// otherwise every inserted break would be ambiguous with the input text
/// or the line/token structure would change.
///
/// # Examples
/// ```
/// use syllabify_txt::config::validate_separator;
///
/// assert!(validate_separator('\u{00B7}').is_ok());
/// assert!(validate_separator(' ').is_err());
/// ```
pub fn validate_separator(separator: char) -> Result<()> {
    if separator.is_whitespace() || separator.is_control() {
        return Err(SyllabifyError::InvalidConfig(format!(
            "separator {separator:?} must be a visible character"
        )));
    }
    if separator == NATIVE_HYPHEN {
        return Err(SyllabifyError::InvalidConfig(
            "separator must differ from the native hyphen '-'".to_string(),
        ));
    }
    Ok(())
}

/// Validate the output folder name.
///
/// Must be exactly one normal path component so that the exclusion check
/// during discovery can match it against the first component of each
/// relative path.
///
/// # Examples
/// ```
/// use syllabify_txt::config::validate_output_folder;
///
/// assert!(validate_output_folder("syllabified_txt").is_ok());
/// assert!(validate_output_folder("out/nested").is_err());
/// assert!(validate_output_folder("..").is_err());
/// ```
pub fn validate_output_folder(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(SyllabifyError::InvalidConfig(format!(
            "output folder '{name}' must be a single directory name"
        ))),
    }
}

/// Validate a file extension (without the leading dot).
pub fn validate_extension(extension: &str) -> Result<()> {
    if EXTENSION_PATTERN.is_match(extension) {
        Ok(())
    } else {
        Err(SyllabifyError::InvalidConfig(format!(
            "extension '{extension}' must be 1-16 ASCII letters or digits"
        )))
    }
}

/// Validate the shape of a language tag.
///
/// Only the syntax is checked here; whether a dictionary exists for the
/// tag is decided when the dictionary is loaded.
pub fn validate_language_tag(tag: &str) -> Result<()> {
    if LANGUAGE_TAG_PATTERN.is_match(tag) {
        Ok(())
    } else {
        Err(SyllabifyError::UnknownLanguage(tag.to_string()))
    }
}

/// Run configuration shared by the walker and the syllabifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that is scanned and under which the output folder lives.
    pub root: PathBuf,

    /// Name of the output folder, relative to `root`.
    pub output_folder: String,

    /// Mark inserted at syllable boundaries.
    pub separator: char,

    /// Dictionary language tag (e.g. `en-US`).
    pub language: String,

    /// Extension of files to process, without the dot.
    pub extension: String,

    /// Dictionary file to load instead of the embedded one.
    pub dictionary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_folder: OUTPUT_FOLDER.to_string(),
            separator: SEPARATOR,
            language: LANGUAGE_TAG.to_string(),
            extension: FILE_EXTENSION.to_string(),
            dictionary_path: None,
        }
    }
}

impl Config {
    /// Default configuration rooted at the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::default().with_root(std::env::current_dir()?))
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    #[must_use]
    pub fn with_output_folder(mut self, name: impl Into<String>) -> Self {
        self.output_folder = name.into();
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_language(mut self, tag: impl Into<String>) -> Self {
        self.language = tag.into();
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        validate_output_folder(&self.output_folder)?;
        validate_separator(self.separator)?;
        validate_language_tag(&self.language)?;
        validate_extension(&self.extension)?;
        Ok(())
    }

    /// Absolute or root-relative directory receiving the output tree.
    #[must_use]
    pub fn output_root(&self) -> PathBuf {
        self.root.join(&self.output_folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_folder, "syllabified_txt");
        assert_eq!(config.separator, '·');
        assert_eq!(config.language, "en-US");
        assert_eq!(config.extension, "txt");
    }

    #[test]
    fn test_output_root() {
        let config = Config::default().with_root("/data/books");
        assert_eq!(
            config.output_root(),
            PathBuf::from("/data/books").join("syllabified_txt")
        );
    }

    #[test]
    fn test_validate_separator_invalid() {
        assert!(validate_separator(' ').is_err());
        assert!(validate_separator('\t').is_err());
        assert!(validate_separator('\n').is_err());
        assert!(validate_separator('\u{0007}').is_err());
        assert!(validate_separator('-').is_err());
    }

    #[test]
    fn test_validate_separator_valid() {
        assert!(validate_separator('·').is_ok());
        assert!(validate_separator('|').is_ok());
        assert!(validate_separator('\u{00AD}').is_ok()); // soft hyphen
    }

    #[test]
    fn test_validate_output_folder() {
        assert!(validate_output_folder("syllabified_txt").is_ok());
        assert!(validate_output_folder("out").is_ok());
        assert!(validate_output_folder("").is_err());
        assert!(validate_output_folder(".").is_err());
        assert!(validate_output_folder("..").is_err());
        assert!(validate_output_folder("/abs").is_err());
        assert!(validate_output_folder("a/b").is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("txt").is_ok());
        assert!(validate_extension("md").is_ok());
        assert!(validate_extension("").is_err());
        assert!(validate_extension(".txt").is_err());
        assert!(validate_extension("t*t").is_err());
    }

    #[test]
    fn test_validate_language_tag() {
        assert!(validate_language_tag("en-US").is_ok());
        assert!(validate_language_tag("de-1996").is_ok());
        assert!(validate_language_tag("fr").is_ok());
        assert!(validate_language_tag("").is_err());
        assert!(validate_language_tag("english").is_err());
        assert!(validate_language_tag("en_US").is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_output_folder("out")
            .with_separator('|')
            .with_language("en-GB")
            .with_extension("md")
            .with_dictionary_path("dicts/en-gb.standard.bincode");

        assert_eq!(config.output_folder, "out");
        assert_eq!(config.separator, '|');
        assert_eq!(config.language, "en-GB");
        assert_eq!(config.extension, "md");
        assert!(config.dictionary_path.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let config = Config::default().with_separator(' ');
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("separator"));
    }
}
