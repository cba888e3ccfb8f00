use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub const EMPTY_MESSAGE: &str = "(empty file)";

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let content = store.read_all()?;
    let mut result = CmdResult::default();
    if content.trim().is_empty() {
        result.add_message(CmdMessage::info(EMPTY_MESSAGE));
    }
    Ok(result.with_content(content))
}
