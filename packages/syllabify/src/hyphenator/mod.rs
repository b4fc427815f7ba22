//! Hyphenation wrapper: dictionary lookup plus separator substitution.

pub mod dictionary;
pub mod syllabifier;

pub use dictionary::{parse_language, HyphenationDictionary, StandardDictionary};
pub use syllabifier::Syllabifier;
