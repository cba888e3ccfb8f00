use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockroomError};
use crate::model::{Record, RecordKind};
use crate::store::RecordStore;

/// Validates the form input for `kind` and appends it.
///
/// Fields are trimmed first. The identifier must be non-empty; everything else
/// is free text. Duplicate identifiers are accepted.
pub fn run<S: RecordStore>(store: &S, kind: RecordKind, fields: Vec<String>) -> Result<CmdResult> {
    let fields: Vec<String> = fields.iter().map(|f| f.trim().to_string()).collect();

    if fields.len() != kind.arity() {
        return Err(StockroomError::Validation(format!(
            "{} records take {} fields ({}), got {}",
            kind,
            kind.arity(),
            kind.fields().join(", "),
            fields.len()
        )));
    }

    let record = Record::new(fields);
    let id = record.id().unwrap_or_default().to_string();
    if id.is_empty() {
        return Err(StockroomError::Validation(format!(
            "{} is required",
            kind.fields()[0]
        )));
    }

    store.append(&record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} {} to {}",
        kind,
        id,
        store.path().display()
    )));
    Ok(result)
}
