use crate::commands::{CmdMessage, CmdResult, Stores};
use crate::error::Result;
use crate::model::RecordKind;
use crate::store::RecordStore;

/// Makes sure every store file exists. Existing files are left untouched.
pub fn run<S: RecordStore>(stores: &Stores<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut paths = Vec::with_capacity(RecordKind::all().len());

    for kind in RecordKind::all() {
        let store = stores.get(*kind);
        store.ensure()?;
        paths.push(store.path().to_path_buf());
        result.add_message(CmdMessage::success(format!(
            "Initialized {} store at {}",
            kind,
            store.path().display()
        )));
    }

    Ok(result.with_store_paths(paths))
}
