#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Printable-ASCII string extraction from arbitrary binary data.

pub mod extract;
pub mod scanner;

pub use extract::{ExtractError, Extraction, extract_file};
pub use scanner::{DEFAULT_MIN_LEN, ExtractedString, StringScanner};
