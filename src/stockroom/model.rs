use serde::{Deserialize, Serialize};
use std::fmt;

/// Field delimiter in stored lines.
pub const DELIMITER: char = ',';
/// Stand-in for a delimiter that appears inside a field.
pub const DELIMITER_SUBSTITUTE: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// The three record types, each backed by its own store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Product,
    Stock,
    Supplier,
}

impl RecordKind {
    pub fn all() -> &'static [RecordKind] {
        &[RecordKind::Product, RecordKind::Stock, RecordKind::Supplier]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Product => "product",
            RecordKind::Stock => "stock",
            RecordKind::Supplier => "supplier",
        }
    }

    /// Field names in storage order. The first one is always the identifier.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Product => &["id", "name", "supplier_id", "about"],
            RecordKind::Stock => &["entry_id", "product_id", "units"],
            RecordKind::Supplier => &["id", "name", "address", "phone", "email", "about"],
        }
    }

    pub fn arity(&self) -> usize {
        self.fields().len()
    }

    pub fn default_file_name(&self) -> String {
        format!("{}.csv", self.name())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered sequence of free-text fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn id(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Encodes the record as one stored line, terminator included.
    ///
    /// Fields are sanitized first, so splitting the result on [`DELIMITER`]
    /// always yields exactly `self.len()` parts.
    pub fn to_line(&self) -> String {
        let mut line = self
            .fields
            .iter()
            .map(|f| sanitize_field(f))
            .collect::<Vec<_>>()
            .join(&DELIMITER.to_string());
        line.push('\n');
        line
    }
}

/// Replaces delimiter and line-break characters so a field cannot split a
/// record into extra columns or extra lines.
pub fn sanitize_field(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            DELIMITER => DELIMITER_SUBSTITUTE,
            '\r' | '\n' => ' ',
            other => other,
        })
        .collect()
}
