//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every stockroom operation, whatever the UI.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It does
//! no printing and holds no business logic of its own.
//!
//! `StockroomApi<S: RecordStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands::{self, Stores};
use crate::error::Result;
use crate::model::{RecordKind, Scope};
use crate::store::RecordStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StorePaths};

pub struct StockroomApi<S: RecordStore> {
    stores: Stores<S>,
    paths: StorePaths,
}

impl<S: RecordStore> StockroomApi<S> {
    pub fn new(stores: Stores<S>, paths: StorePaths) -> Self {
        Self { stores, paths }
    }

    pub fn store(&self, kind: RecordKind) -> &S {
        self.stores.get(kind)
    }

    pub fn add_record(&self, kind: RecordKind, fields: Vec<String>) -> Result<CmdResult> {
        commands::add::run(self.stores.get(kind), kind, fields)
    }

    pub fn list_records(&self, kind: RecordKind) -> Result<CmdResult> {
        commands::list::run(self.stores.get(kind))
    }

    pub fn search_records(&self, kind: RecordKind, term: &str) -> Result<CmdResult> {
        commands::search::run(self.stores.get(kind), term)
    }

    pub fn store_path(&self, kind: RecordKind) -> Result<CmdResult> {
        commands::paths::run(self.stores.get(kind))
    }

    pub fn fields(&self, kind: RecordKind) -> Result<CmdResult> {
        commands::fields::run(kind)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.stores)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> StockroomApi<InMemoryStore> {
        StockroomApi::new(
            Stores::from_fn(|_| InMemoryStore::new()),
            StorePaths {
                project: PathBuf::from("."),
                global: None,
            },
        )
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn add_dispatches_to_the_kind_store() {
        let api = api();
        api.add_record(RecordKind::Stock, strings(&["E1", "P1", "3"]))
            .unwrap();

        assert_eq!(api.store(RecordKind::Stock).read_all().unwrap(), "E1,P1,3\n");
        assert!(!api.store(RecordKind::Product).exists());
    }

    #[test]
    fn list_and_search_read_the_same_store() {
        let api = api();
        api.add_record(RecordKind::Product, strings(&["1", "Bolt", "S1", "steel"]))
            .unwrap();

        let listed = api.list_records(RecordKind::Product).unwrap();
        assert_eq!(listed.content.as_deref(), Some("1,Bolt,S1,steel\n"));

        let found = api.search_records(RecordKind::Product, "BOLT").unwrap();
        assert_eq!(found.lines, vec!["1,Bolt,S1,steel"]);

        let other = api.search_records(RecordKind::Supplier, "bolt").unwrap();
        assert!(other.lines.is_empty());
    }

    #[test]
    fn path_reports_the_kind_store() {
        let api = api();
        let res = api.store_path(RecordKind::Supplier).unwrap();
        assert_eq!(res.store_paths, vec![PathBuf::from("memory.csv")]);
    }

    #[test]
    fn init_touches_all_stores() {
        let api = api();
        api.init().unwrap();
        for kind in RecordKind::all() {
            assert!(api.store(*kind).exists());
        }
    }

    #[test]
    fn fields_describe_the_kind() {
        let res = api().fields(RecordKind::Stock).unwrap();
        assert_eq!(res.fields, vec!["entry_id", "product_id", "units"]);
    }
}
