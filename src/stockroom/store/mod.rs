//! # Storage Layer
//!
//! A record store owns exactly one flat text file. The [`RecordStore`] trait
//! lets the command layer work the same way against the real filesystem and
//! against an in-memory stand-in.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, one file per record kind
//! - [`memory::InMemoryStore`]: no persistence, used by command tests
//!
//! ## Storage Format
//!
//! ```text
//! 1,Bolt,S1,steel
//! 2,Nut; hex,S1,zinc plated
//! ```
//!
//! One record per line, fields joined with `,`, no header row. See
//! [`crate::model::Record::to_line`] for how fields are sanitized.
//!
//! ## Lifecycle
//!
//! A store is either "file absent" or "file present". Every operation first
//! moves it to "file present" (creating an empty file), then acts. Nothing is
//! cached between calls: reads always re-scan the file.

use crate::error::Result;
use crate::model::Record;
use std::path::Path;

pub mod fs;
pub mod memory;

/// UTF-8 byte-order mark, optionally written at the start of new files.
pub const BOM: &str = "\u{feff}";

pub trait RecordStore {
    /// Location of the backing file (virtual for non-file stores).
    fn path(&self) -> &Path;

    /// Creates the backing file empty if it does not exist yet.
    fn ensure(&self) -> Result<()>;

    /// Appends one record as a single line. Identifiers are not checked for
    /// uniqueness.
    fn append(&self, record: &Record) -> Result<()>;

    /// Returns the raw stored text, line breaks included.
    fn read_all(&self) -> Result<String>;

    /// Case-insensitive substring match against each stored line, in file
    /// order, with line terminators stripped.
    fn search(&self, term: &str) -> Result<Vec<String>> {
        let content = self.read_all()?;
        Ok(matching_lines(&content, term))
    }
}

/// Lines of `content` containing `term`, ignoring case.
///
/// Matching runs on the whole line as stored, delimiters included, so a term
/// may span field boundaries.
pub fn matching_lines(content: &str, term: &str) -> Vec<String> {
    let term_lower = term.to_lowercase();
    content
        .lines()
        .filter(|line| line.to_lowercase().contains(&term_lower))
        .map(str::to_string)
        .collect()
}

/// Drops a leading byte-order mark, if any.
pub(crate) fn strip_bom(content: String) -> String {
    match content.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => content,
    }
}
