//! Column-level model types: SQL types, column specs and the two column kinds.

use serde::{Deserialize, Serialize};

use super::key::ForeignKey;

/// A SQL type name with its opaque dimension literals (length, precision, scale).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<String>,
}

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimensions: vec![],
        }
    }

    pub fn with_dimensions<I, S>(name: impl Into<String>, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            dimensions: dimensions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnConstraint {
    Default {
        expression: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

/// Everything about a column except its name, nullability and foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    #[serde(rename = "type")]
    pub data_type: Type,
    #[serde(default)]
    pub unique: bool,
    /// Only meaningful when the column is used as a single primary key.
    #[serde(default)]
    pub identity: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnSpec {
    pub fn new(data_type: Type) -> Self {
        Self {
            data_type,
            unique: false,
            identity: false,
            comment: None,
            constraints: vec![],
        }
    }
}

/// A plain, stored column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(flatten)]
    pub spec: ColumnSpec,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKey>,
}

/// A column whose value is derived from a raw SQL expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedColumn {
    pub name: String,
    #[serde(rename = "computed")]
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyColumn {
    Computed(ComputedColumn),
    Plain(Column),
}

impl AnyColumn {
    pub fn name(&self) -> &str {
        match self {
            AnyColumn::Computed(column) => &column.name,
            AnyColumn::Plain(column) => &column.name,
        }
    }
}

impl From<Column> for AnyColumn {
    fn from(column: Column) -> Self {
        AnyColumn::Plain(column)
    }
}

impl From<ComputedColumn> for AnyColumn {
    fn from(column: ComputedColumn) -> Self {
        AnyColumn::Computed(column)
    }
}
