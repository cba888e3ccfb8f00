use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_store_paths(vec![store.path().to_path_buf()]))
}
