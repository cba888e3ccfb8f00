use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordKind;

/// Describes the record layout of `kind`.
pub fn run(kind: RecordKind) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_fields(kind.fields().to_vec());
    result.add_message(CmdMessage::info(format!(
        "One {} per line: {}",
        kind,
        kind.fields().join(",")
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_fields_in_storage_order() {
        let res = run(RecordKind::Supplier).unwrap();
        assert_eq!(
            res.fields,
            vec!["id", "name", "address", "phone", "email", "about"]
        );
        assert!(res.messages[0].content.contains("id,name,address"));
    }
}
