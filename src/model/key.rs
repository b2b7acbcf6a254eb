use serde::{Deserialize, Serialize};

use super::column::{Column, Type};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub target: String,
    #[serde(rename = "type")]
    pub data_type: Type,
    #[serde(default)]
    pub cascade_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryKey {
    /// A full column definition acting as the key. Must not be nullable.
    Single(Column),
    /// The key column is itself a reference to another table; its type is the
    /// foreign key's type.
    ForeignKeyRef {
        name: String,
        foreign_key: ForeignKey,
    },
    /// Names of columns declared elsewhere on the table.
    Composite(Vec<String>),
}

impl PrimaryKey {
    /// Type of the key column, if the key has exactly one column.
    pub fn column_type(&self) -> Option<&Type> {
        match self {
            PrimaryKey::Single(column) => Some(&column.spec.data_type),
            PrimaryKey::ForeignKeyRef { foreign_key, .. } => Some(&foreign_key.data_type),
            PrimaryKey::Composite(_) => None,
        }
    }
}
