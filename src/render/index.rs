//! `create index` rendering.

use tracing::debug;

use crate::model::{Index, Table};
use crate::render::naming::NamingStrategy;
use crate::render::writer::DdlWriter;

/// Render a complete `create index` statement, separator included.
///
/// Handles:
/// - unique indexes
/// - unnamed indexes (when the naming strategy returns an empty name)
/// - `include` columns for covering indexes
/// - `where` predicates for filtered indexes, on their own indented line
pub fn render_create_index(
    writer: &mut DdlWriter<'_>,
    naming: &dyn NamingStrategy,
    table: &Table,
    index: &Index,
) {
    let name = naming.index_name(table, index);
    debug!(table = %table.name, index = %name, "Rendering create index");

    writer.append("create ");
    if index.unique {
        writer.append("unique ");
    }
    writer.append("index ");
    if !name.is_empty() {
        writer.append_identifier(&name);
        writer.append(" ");
    }

    writer.append("on ");
    writer.append_identifier(&table.name);

    let columns = writer.identifier_list(&index.columns);
    writer.append(&format!(" ({columns})"));

    if !index.include.is_empty() {
        let include = writer.identifier_list(&index.include);
        writer.append(&format!(" include ({include})"));
    }

    if let Some(filter) = &index.filter {
        writer.append_indented(&format!("where {filter}"));
    }

    writer.end_statement();
}
