//! DDL rendering.
//!
//! [`render_schema`] walks a [`Schema`] in order and emits, per table, the
//! `create table` statement followed by that table's `create index` statements.
//! Quoting and punctuation decisions are delegated to a [`Dialect`]; constraint
//! names come from a [`NamingStrategy`].

pub mod dialect;
pub mod index;
pub mod naming;
pub mod table;
pub mod writer;

pub use dialect::{Dialect, DialectKind, SqlServerDialect, SqliteDialect};
pub use index::render_create_index;
pub use naming::{DefaultNaming, NamingKind, NamingStrategy, UnnamedConstraints};
pub use table::render_create_table;
pub use writer::DdlWriter;

use tracing::debug;

use crate::model::{Schema, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pad column names so types line up within a table body.
    pub align_columns: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            align_columns: true,
        }
    }
}

/// Render a whole schema. `None` uses [`DefaultNaming`].
pub fn render_schema(
    schema: &Schema,
    naming: Option<&dyn NamingStrategy>,
    dialect: &dyn Dialect,
) -> String {
    render_schema_with(
        schema,
        naming.unwrap_or(&DefaultNaming),
        dialect,
        &RenderOptions::default(),
    )
}

pub fn render_schema_with(
    schema: &Schema,
    naming: &dyn NamingStrategy,
    dialect: &dyn Dialect,
    options: &RenderOptions,
) -> String {
    debug!(
        dialect = dialect.name(),
        tables = schema.tables.len(),
        "Rendering schema"
    );

    let mut writer = DdlWriter::new(dialect);
    for table in &schema.tables {
        render_table(&mut writer, naming, table, options);
    }
    writer.finish()
}

/// Render one table followed by its indices.
pub fn render_table(
    writer: &mut DdlWriter<'_>,
    naming: &dyn NamingStrategy,
    table: &Table,
    options: &RenderOptions,
) {
    render_create_table(writer, naming, table, options);
    for index in &table.indices {
        render_create_index(writer, naming, table, index);
    }
}
