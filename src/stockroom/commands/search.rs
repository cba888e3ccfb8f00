use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockroomError};
use crate::store::RecordStore;

pub const NO_MATCHES_MESSAGE: &str = "No matches found.";

/// Lines containing `term`, ignoring case. Blank terms are rejected before
/// the store is read; surrounding whitespace is trimmed off the term.
pub fn run<S: RecordStore>(store: &S, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        return Err(StockroomError::Validation(
            "Search term cannot be empty".to_string(),
        ));
    }

    let lines = store.search(term)?;
    let mut result = CmdResult::default();
    if lines.is_empty() {
        result.add_message(CmdMessage::info(NO_MATCHES_MESSAGE));
    }
    Ok(result.with_lines(lines))
}
