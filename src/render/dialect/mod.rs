//! Dialect-specific lexical decisions.
//!
//! The renderer is dialect-neutral except for what goes through [`Dialect`]:
//! identifier quoting, statement separators, trailing commas and computed-column
//! syntax. Adding a dialect means implementing this trait; nothing in the
//! renderer changes.

mod sqlite;
mod sqlserver;

pub use sqlite::SqliteDialect;
pub use sqlserver::SqlServerDialect;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::model::ComputedColumn;

pub trait Dialect: Send + Sync {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Text appended after each complete statement.
    fn statement_separator(&self) -> &str {
        ";"
    }

    /// Whether the last entry of a table body may keep its trailing comma.
    fn supports_trailing_commas(&self) -> bool;

    /// Opening and closing quote characters.
    fn quote_chars(&self) -> (char, char);

    /// Case-insensitive reserved keyword check.
    fn is_reserved(&self, word: &str) -> bool;

    fn quote_identifier<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if !needs_quoting(name, |word| self.is_reserved(word)) {
            return Cow::Borrowed(name);
        }

        let (open, close) = self.quote_chars();
        let escaped = name.replace(close, &format!("{close}{close}"));
        Cow::Owned(format!("{open}{escaped}{close}"))
    }

    fn computed_column(&self, column: &ComputedColumn) -> String;
}

/// An identifier needs quoting when it is empty, a reserved word, starts with a
/// digit, or contains anything besides letters, digits, `_`, `@` and `#`.
pub fn needs_quoting(name: &str, is_reserved: impl Fn(&str) -> bool) -> bool {
    let Some(first) = name.chars().next() else {
        return true;
    };

    first.is_ascii_digit()
        || name
            .chars()
            .any(|c| !(c.is_alphanumeric() || matches!(c, '_' | '@' | '#')))
        || is_reserved(name)
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    #[value(name = "sqlserver", alias = "mssql")]
    #[serde(alias = "mssql")]
    SqlServer,
    Sqlite,
}

impl DialectKind {
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectKind::SqlServer => &SqlServerDialect,
            DialectKind::Sqlite => &SqliteDialect,
        }
    }
}
