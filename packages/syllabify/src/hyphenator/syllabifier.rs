//! Syllable-boundary marking for words, lines and whole documents.

use crate::config::{Config, NATIVE_HYPHEN};
use crate::error::Result;
use crate::text::{
    ends_with_line_break, split_lines, split_tokens, LINE_SEPARATOR, TOKEN_SEPARATOR,
};

use super::dictionary::{HyphenationDictionary, StandardDictionary};

/// Inserts a separator mark at every syllable boundary of a word.
///
/// Boundaries come from the wrapped dictionary; every native hyphen in the
/// dictionary output is then replaced by the separator. Literal hyphens in
/// the input therefore also become separators.
pub struct Syllabifier<D: HyphenationDictionary> {
    dictionary: D,
    separator: char,
}

impl<D: HyphenationDictionary> Syllabifier<D> {
    /// Create a syllabifier around a dictionary.
    #[must_use]
    pub fn new(dictionary: D, separator: char) -> Self {
        Self {
            dictionary,
            separator,
        }
    }

    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Mark syllable boundaries in a single token.
    ///
    /// Accepts any input, including punctuation and the empty string.
    #[must_use]
    pub fn syllabify(&self, word: &str) -> String {
        self.dictionary
            .mark_breaks(word)
            .chars()
            .map(|c| if c == NATIVE_HYPHEN { self.separator } else { c })
            .collect()
    }

    /// Syllabify every space-separated token of a line.
    #[must_use]
    pub fn syllabify_line(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() + line.len() / 4);
        for (i, token) in split_tokens(line).enumerate() {
            if i > 0 {
                out.push(TOKEN_SEPARATOR);
            }
            out.push_str(&self.syllabify(token));
        }
        out
    }

    /// Syllabify a whole document, normalizing every line terminator to `\n`.
    ///
    /// A final line terminator in the input is kept, so the output has the
    /// same number of lines as the input.
    #[must_use]
    pub fn syllabify_text(&self, text: &str) -> String {
        let mut out = split_lines(text)
            .into_iter()
            .map(|line| self.syllabify_line(line))
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR);
        if ends_with_line_break(text) {
            out.push_str(LINE_SEPARATOR);
        }
        out
    }
}

impl Syllabifier<StandardDictionary> {
    /// Build a syllabifier from the configured language and separator.
    pub fn from_config(config: &Config) -> Result<Self> {
        let dictionary =
            StandardDictionary::load(&config.language, config.dictionary_path.as_deref())?;
        Ok(Self::new(dictionary, config.separator))
    }
}
