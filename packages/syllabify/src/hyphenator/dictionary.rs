//! Hyphenation dictionaries.
//!
//! The break-point lookup itself is provided by the `hyphenation` crate
//! (Knuth-Liang patterns). This module only exposes it behind a small trait
//! so the syllabifier can be driven by other dictionaries in tests.

use std::path::Path;

use hyphenation::{Hyphenator, Language, Load, Standard};

use crate::config::NATIVE_HYPHEN;
use crate::error::{Result, SyllabifyError};

/// A source of hyphenation points.
pub trait HyphenationDictionary {
    /// Return `word` with [`NATIVE_HYPHEN`] inserted at every permitted break.
    ///
    /// Must be total: a word without breaks is returned unchanged.
    fn mark_breaks(&self, word: &str) -> String;
}

impl<D: HyphenationDictionary + ?Sized> HyphenationDictionary for &D {
    fn mark_breaks(&self, word: &str) -> String {
        (**self).mark_breaks(word)
    }
}

/// Map a language tag to a `hyphenation` language.
///
/// Matching is case-insensitive. Tags without a region fall back to the
/// most common variant (`en` is US English, `de` is the 1996 orthography).
pub fn parse_language(tag: &str) -> Result<Language> {
    let language = match tag.to_ascii_lowercase().as_str() {
        "en" | "en-us" => Language::EnglishUS,
        "en-gb" => Language::EnglishGB,
        "de" | "de-de" | "de-1996" => Language::German1996,
        "de-1901" => Language::German1901,
        "de-ch" => Language::GermanSwiss,
        "fr" | "fr-fr" => Language::French,
        "nl" | "nl-nl" => Language::Dutch,
        "es" | "es-es" => Language::Spanish,
        "it" | "it-it" => Language::Italian,
        "pt" | "pt-pt" | "pt-br" => Language::Portuguese,
        "sv" | "sv-se" => Language::Swedish,
        _ => return Err(SyllabifyError::UnknownLanguage(tag.to_string())),
    };
    Ok(language)
}

/// Dictionary backed by the `hyphenation` crate's standard patterns.
#[derive(Debug)]
pub struct StandardDictionary {
    language: Language,
    standard: Standard,
}

impl StandardDictionary {
    /// Load the dictionary embedded in the binary.
    ///
    /// Only US English is embedded; other languages need [`Self::from_path`].
    pub fn embedded(language: Language) -> Result<Self> {
        let standard =
            Standard::from_embedded(language).map_err(|e| SyllabifyError::Dictionary {
                language: language.code().to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { language, standard })
    }

    /// Load a serialized dictionary (e.g. `en-gb.standard.bincode`) from disk.
    pub fn from_path(language: Language, path: &Path) -> Result<Self> {
        let standard =
            Standard::from_path(language, path).map_err(|e| SyllabifyError::Dictionary {
                language: language.code().to_string(),
                message: format!("{}: {e}", path.display()),
            })?;
        Ok(Self { language, standard })
    }

    /// Load the dictionary for a language tag, from `path` when given.
    pub fn load(tag: &str, path: Option<&Path>) -> Result<Self> {
        let language = parse_language(tag)?;
        match path {
            Some(path) => Self::from_path(language, path),
            None => Self::embedded(language),
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Insert hyphens into a segment that contains no literal hyphen.
    fn mark_segment(&self, segment: &str, out: &mut String) {
        let hyphenated = self.standard.hyphenate(segment);
        let mut start = 0;
        for &index in &hyphenated.breaks {
            // Break indices are byte offsets on char boundaries.
            if let Some(part) = segment.get(start..index) {
                out.push_str(part);
                out.push(NATIVE_HYPHEN);
                start = index;
            }
        }
        out.push_str(segment.get(start..).unwrap_or_default());
    }
}

impl HyphenationDictionary for StandardDictionary {
    /// Literal hyphens split the word first, so each one survives as a
    /// single boundary and never doubles up with a pattern break.
    fn mark_breaks(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() + word.len() / 2);
        for (i, segment) in word.split(NATIVE_HYPHEN).enumerate() {
            if i > 0 {
                out.push(NATIVE_HYPHEN);
            }
            self.mark_segment(segment, &mut out);
        }
        out
    }
}
