use crate::config::StockroomConfig;
use crate::error::{Result, StockroomError};
use crate::model::{RecordKind, Scope};
use crate::store::RecordStore;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod fields;
pub mod init;
pub mod list;
pub mod paths;
pub mod search;

#[derive(Debug, Clone)]
pub struct StorePaths {
    pub project: PathBuf,
    pub global: Option<PathBuf>,
}

impl StorePaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => Ok(self.project.clone()),
            Scope::Global => self
                .global
                .clone()
                .ok_or_else(|| StockroomError::Config("Global scope is not available".to_string())),
        }
    }
}

/// One store per record kind.
pub struct Stores<S: RecordStore> {
    product: S,
    stock: S,
    supplier: S,
}

impl<S: RecordStore> Stores<S> {
    pub fn from_fn<F: FnMut(RecordKind) -> S>(mut make: F) -> Self {
        Self {
            product: make(RecordKind::Product),
            stock: make(RecordKind::Stock),
            supplier: make(RecordKind::Supplier),
        }
    }

    pub fn get(&self, kind: RecordKind) -> &S {
        match kind {
            RecordKind::Product => &self.product,
            RecordKind::Stock => &self.stock,
            RecordKind::Supplier => &self.supplier,
        }
    }

    /// Swaps in a different store for one kind.
    pub fn replace(&mut self, kind: RecordKind, store: S) {
        let slot = match kind {
            RecordKind::Product => &mut self.product,
            RecordKind::Stock => &mut self.stock,
            RecordKind::Supplier => &mut self.supplier,
        };
        *slot = store;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Raw store text, as returned by `list`.
    pub content: Option<String>,
    /// Matching lines, as returned by `search`.
    pub lines: Vec<String>,
    pub store_paths: Vec<PathBuf>,
    pub fields: Vec<&'static str>,
    pub config: Option<StockroomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_store_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.store_paths = paths;
        self
    }

    pub fn with_fields(mut self, fields: Vec<&'static str>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_config(mut self, config: StockroomConfig) -> Self {
        self.config = Some(config);
        self
    }
}
