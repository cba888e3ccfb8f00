use super::RecordStore;
use crate::error::{Result, StockroomError};
use crate::model::Record;
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory store for testing.
///
/// Uses `RefCell` so the trait can stay `&self` throughout; the crate is
/// single-threaded. `None` content stands for "file absent".
pub struct InMemoryStore {
    path: PathBuf,
    content: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            path: PathBuf::from("memory.csv"),
            content: RefCell::new(None),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out in the "file present" state with the given text.
    pub fn with_content(content: impl Into<String>) -> Self {
        let store = Self::default();
        *store.content.borrow_mut() = Some(content.into());
        store
    }

    /// Make every subsequent append fail, to exercise error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn exists(&self) -> bool {
        self.content.borrow().is_some()
    }
}

impl RecordStore for InMemoryStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn ensure(&self) -> Result<()> {
        self.content.borrow_mut().get_or_insert_with(String::new);
        Ok(())
    }

    fn append(&self, record: &Record) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StockroomError::io(
                &self.path,
                io::Error::new(io::ErrorKind::Other, "simulated write error"),
            ));
        }
        self.content
            .borrow_mut()
            .get_or_insert_with(String::new)
            .push_str(&record.to_line());
        Ok(())
    }

    fn read_all(&self) -> Result<String> {
        self.ensure()?;
        Ok(self.content.borrow().clone().unwrap_or_default())
    }
}
