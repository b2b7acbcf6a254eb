//! Immutable schema model consumed by the renderer.
//!
//! A [`Schema`] is an ordered list of [`Table`]s. Tables, columns, keys and indices
//! are plain values; once a model is built (by hand, with [`crate::builder`], or by
//! deserializing a schema file) nothing in the crate mutates it.

pub mod column;
pub mod declaration;
pub mod error;
pub mod index;
pub mod key;

pub use column::{AnyColumn, Column, ColumnConstraint, ColumnSpec, ComputedColumn, Type};
pub use declaration::Declaration;
pub use error::ModelError;
pub use index::{CheckConstraint, Index};
pub use key::{ForeignKey, PrimaryKey};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn index_count(&self) -> usize {
        self.tables.iter().map(|table| table.indices.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<PrimaryKey>,
    #[serde(default)]
    pub columns: Vec<AnyColumn>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indices: Vec<Index>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<CheckConstraint>,
    /// Unique column groups, rendered as table-level unique constraints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uniques: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            primary_key: None,
            columns: vec![],
            indices: vec![],
            checks: vec![],
            uniques: vec![],
        }
    }

    /// Names of every column the table body declares, key column first.
    pub fn column_names(&self) -> Vec<&str> {
        let key_column = match &self.primary_key {
            Some(PrimaryKey::Single(column)) => Some(column.name.as_str()),
            Some(PrimaryKey::ForeignKeyRef { name, .. }) => Some(name.as_str()),
            Some(PrimaryKey::Composite(_)) | None => None,
        };

        key_column
            .into_iter()
            .chain(self.columns.iter().map(AnyColumn::name))
            .collect()
    }
}
