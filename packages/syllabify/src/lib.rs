//! syllabify-txt - Mark syllable boundaries in a tree of text files.
//!
//! Every `.txt` file below a scan root is read, each space-separated token
//! is hyphenated with a dictionary, the hyphens are replaced by a middle dot
//! and the result is written to a mirrored tree under `syllabified_txt/`.
//!
//! # Example
//!
//! ```
//! use syllabify_txt::{Config, Syllabifier};
//!
//! let syllabifier = Syllabifier::from_config(&Config::default()).unwrap();
//! assert_eq!(syllabifier.syllabify("well-known"), "well·known");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants, validation and the run [`Config`]
//! - [`error`]: Error types and Result alias
//! - [`hyphenator`]: Dictionary seam and the [`Syllabifier`]
//! - [`text`]: Line and token splitting
//! - [`walker`]: Recursive discovery of input files
//! - [`rewriter`]: Per-file read-transform-write pipeline
//! - [`report`]: Per-file outcomes aggregated into a [`RunReport`]
//! - [`cli`]: Console output for the binary

pub mod cli;
pub mod config;
pub mod error;
pub mod hyphenator;
pub mod report;
pub mod rewriter;
pub mod text;
pub mod walker;

pub use config::Config;
pub use error::{Result, SyllabifyError};
pub use hyphenator::{HyphenationDictionary, StandardDictionary, Syllabifier};
pub use report::{FileOutcome, FileStatus, RunReport};
pub use rewriter::{process_files, Rewriter, RunEvent};
pub use walker::{discover_files, DiscoveredFile};
