//! Ordering of the entries inside a `create table` body.
//!
//! The renderer never decides ordering itself; it walks the list produced by
//! [`Table::declarations`]. Key columns lead, composite keys trail the columns they
//! name, then unique groups, then checks.

use super::column::{Column, ComputedColumn};
use super::index::CheckConstraint;
use super::key::{ForeignKey, PrimaryKey};
use super::{AnyColumn, Table};

/// One comma-separated entry of a table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration<'a> {
    SinglePrimaryKey(&'a Column),
    ForeignKeyPrimaryKey {
        name: &'a str,
        foreign_key: &'a ForeignKey,
    },
    CompositePrimaryKey(&'a [String]),
    Column(&'a Column),
    Computed(&'a ComputedColumn),
    Unique(&'a [String]),
    Check(&'a CheckConstraint),
}

impl Declaration<'_> {
    /// Column name for declarations that start with one.
    pub fn column_name(&self) -> Option<&str> {
        match self {
            Declaration::SinglePrimaryKey(column) | Declaration::Column(column) => {
                Some(column.name.as_str())
            }
            Declaration::ForeignKeyPrimaryKey { name, .. } => Some(*name),
            Declaration::Computed(column) => Some(column.name.as_str()),
            Declaration::CompositePrimaryKey(_)
            | Declaration::Unique(_)
            | Declaration::Check(_) => None,
        }
    }

    /// Trailing line comment carried by the declaration.
    pub fn comment(&self) -> Option<&str> {
        match self {
            Declaration::SinglePrimaryKey(column) | Declaration::Column(column) => {
                column.spec.comment.as_deref()
            }
            _ => None,
        }
    }
}

impl Table {
    pub fn declarations(&self) -> Vec<Declaration<'_>> {
        let mut declarations = Vec::new();

        match &self.primary_key {
            Some(PrimaryKey::ForeignKeyRef { name, foreign_key }) => {
                declarations.push(Declaration::ForeignKeyPrimaryKey {
                    name: name.as_str(),
                    foreign_key,
                });
            }
            Some(PrimaryKey::Single(column)) => {
                declarations.push(Declaration::SinglePrimaryKey(column));
            }
            // Composite keys follow the columns they reference.
            Some(PrimaryKey::Composite(_)) | None => {}
        }

        for column in &self.columns {
            declarations.push(match column {
                AnyColumn::Plain(column) => Declaration::Column(column),
                AnyColumn::Computed(column) => Declaration::Computed(column),
            });
        }

        if let Some(PrimaryKey::Composite(columns)) = &self.primary_key {
            declarations.push(Declaration::CompositePrimaryKey(columns));
        }

        declarations.extend(self.uniques.iter().map(|unique| Declaration::Unique(unique)));
        declarations.extend(self.checks.iter().map(Declaration::Check));

        declarations
    }
}
