//! Constraint and index naming policies.
//!
//! Every method returns the name to use, or an empty string to leave the
//! constraint unnamed. Call sites drop the `constraint <name>` clause entirely
//! when they get an empty name.

use serde::{Deserialize, Serialize};

use crate::model::{Index, Table};

pub trait NamingStrategy: Send + Sync {
    fn index_name(&self, table: &Table, index: &Index) -> String {
        match &index.name {
            Some(name) => name.clone(),
            None => format!("idx_{}_{}", table.name, index.columns.join("_")),
        }
    }

    fn primary_key_constraint_name(&self, table: &Table, _columns: &[&str]) -> String {
        format!("pk_{}", table.name)
    }

    fn foreign_key_constraint_name(&self, table: &Table, _target: &str, column: &str) -> String {
        let stem = column.strip_suffix("_id").unwrap_or(column);
        format!("fk_{}_{}", table.name, stem)
    }

    fn unique_constraint_name(&self, table: &Table, columns: &[&str]) -> String {
        format!("uq_{}_{}", table.name, columns.join("_"))
    }

    fn default_constraint_name(&self, table: &Table, column: &str) -> String {
        format!("df_{}_{}", table.name, column)
    }
}

/// `pk_`, `fk_`, `uq_`, `df_` and `idx_` prefixed names.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNaming;

impl NamingStrategy for DefaultNaming {}

/// Leaves every constraint to the database to name. Indices keep explicit names.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnnamedConstraints;

impl NamingStrategy for UnnamedConstraints {
    fn index_name(&self, _table: &Table, index: &Index) -> String {
        index.name.clone().unwrap_or_default()
    }

    fn primary_key_constraint_name(&self, _table: &Table, _columns: &[&str]) -> String {
        String::new()
    }

    fn foreign_key_constraint_name(&self, _table: &Table, _target: &str, _column: &str) -> String {
        String::new()
    }

    fn unique_constraint_name(&self, _table: &Table, _columns: &[&str]) -> String {
        String::new()
    }

    fn default_constraint_name(&self, _table: &Table, _column: &str) -> String {
        String::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NamingKind {
    #[default]
    Default,
    Unnamed,
}

impl NamingKind {
    pub fn strategy(self) -> &'static dyn NamingStrategy {
        match self {
            NamingKind::Default => &DefaultNaming,
            NamingKind::Unnamed => &UnnamedConstraints,
        }
    }
}
