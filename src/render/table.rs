//! `create table` rendering.
//!
//! The body is the table's declaration sequence, one entry per line, each entry
//! possibly spilling named constraints onto indented continuation lines.

use tracing::debug;

use crate::model::{ColumnConstraint, Declaration, Table, Type};
use crate::render::RenderOptions;
use crate::render::naming::NamingStrategy;
use crate::render::writer::DdlWriter;

struct TableContext<'a> {
    table: &'a Table,
    naming: &'a dyn NamingStrategy,
    name_width: usize,
}

/// Render the `create table` statement for one table, separator included.
pub fn render_create_table(
    writer: &mut DdlWriter<'_>,
    naming: &dyn NamingStrategy,
    table: &Table,
    options: &RenderOptions,
) {
    let declarations = table.declarations();
    debug!(
        table = %table.name,
        declarations = declarations.len(),
        "Rendering create table"
    );

    if let Some(comment) = &table.comment {
        writer.line_comment(comment);
    }

    writer.append("create table ");
    writer.append_identifier(&table.name);
    writer.new_line();
    writer.append_line("(");

    let context = TableContext {
        table,
        naming,
        name_width: if options.align_columns {
            name_width(writer, &declarations)
        } else {
            0
        },
    };
    let trailing_commas = writer.dialect().supports_trailing_commas();

    {
        let mut body = writer.indent_scope();
        for (position, declaration) in declarations.iter().enumerate() {
            render_declaration(&mut body, &context, declaration);

            let is_last = position + 1 == declarations.len();
            if !is_last || trailing_commas {
                body.append(",");
            }

            // Comments trail the comma so they never swallow it.
            if let Some(comment) = declaration.comment() {
                body.append(" -- ");
                body.append(comment);
            }

            body.new_line();
        }
    }

    writer.append(")");
    writer.end_statement();
}

/// Widest quoted name among the declarations that lead with `<name> <type>`.
fn name_width(writer: &DdlWriter<'_>, declarations: &[Declaration<'_>]) -> usize {
    declarations
        .iter()
        .filter(|declaration| !matches!(declaration, Declaration::Computed(_)))
        .filter_map(Declaration::column_name)
        .map(|name| writer.identifier(name).chars().count())
        .max()
        .unwrap_or(0)
}

fn render_declaration(
    writer: &mut DdlWriter<'_>,
    context: &TableContext<'_>,
    declaration: &Declaration<'_>,
) {
    let table = context.table;
    let naming = context.naming;

    match *declaration {
        Declaration::SinglePrimaryKey(column) => {
            append_column_head(writer, context, &column.name, &column.spec.data_type);
            if column.spec.identity {
                writer.append(" identity");
            }

            let pk_name = naming.primary_key_constraint_name(table, &[column.name.as_str()]);
            if pk_name.is_empty() {
                writer.append(" primary key");
            } else {
                writer.indent(|writer| {
                    append_constraint_prefix(writer, &pk_name);
                    writer.append("primary key");
                });
            }
        }

        Declaration::ForeignKeyPrimaryKey { name, foreign_key } => {
            append_column_head(writer, context, name, &foreign_key.data_type);

            let pk_name = naming.primary_key_constraint_name(table, &[name]);
            writer.append(" ");
            append_constraint_prefix(writer, &pk_name);
            writer.append("primary key");

            // The key line never cascades; only plain reference columns do.
            append_references(writer, context, name, &foreign_key.target, false);
        }

        Declaration::CompositePrimaryKey(columns) => {
            let names: Vec<&str> = columns.iter().map(String::as_str).collect();
            let pk_name = naming.primary_key_constraint_name(table, &names);

            append_constraint_prefix(writer, &pk_name);
            writer.append("primary key (");
            let list = writer.identifier_list(columns);
            writer.append(&list);
            writer.append(")");
        }

        Declaration::Column(column) => {
            append_column_head(writer, context, &column.name, &column.spec.data_type);
            if !column.nullable {
                writer.append(" not null");
            }

            for constraint in &column.spec.constraints {
                match constraint {
                    ColumnConstraint::Default { expression, name } => {
                        let df_name = name.clone().unwrap_or_else(|| {
                            naming.default_constraint_name(table, &column.name)
                        });
                        if df_name.is_empty() {
                            writer.append(" default ");
                            writer.append(expression);
                        } else {
                            writer.indent(|writer| {
                                append_constraint_prefix(writer, &df_name);
                                writer.append("default ");
                                writer.append(expression);
                            });
                        }
                    }
                }
            }

            if column.spec.unique {
                let uq_name = naming.unique_constraint_name(table, &[column.name.as_str()]);
                if uq_name.is_empty() {
                    writer.append(" unique");
                } else {
                    writer.indent(|writer| {
                        append_constraint_prefix(writer, &uq_name);
                        writer.append("unique");
                    });
                }
            }

            if let Some(foreign_key) = &column.foreign_key {
                append_references(
                    writer,
                    context,
                    &column.name,
                    &foreign_key.target,
                    foreign_key.cascade_delete,
                );
            }
        }

        Declaration::Computed(column) => {
            let rendered = writer.dialect().computed_column(column);
            writer.append(&rendered);
        }

        Declaration::Unique(columns) => {
            let names: Vec<&str> = columns.iter().map(String::as_str).collect();
            let uq_name = naming.unique_constraint_name(table, &names);
            let list = writer.identifier_list(columns);

            if uq_name.is_empty() {
                writer.append(&format!("unique ({list})"));
            } else {
                writer.append("constraint ");
                writer.append_identifier(&uq_name);
                writer.append_indented(&format!("unique ({list})"));
            }
        }

        Declaration::Check(check) => {
            writer.append("constraint ");
            writer.append_identifier(&check.name);
            writer.append_indented(&format!("check ({})", check.condition));
        }
    }
}

/// `<name> <type>`, with the name padded to the table's column width.
fn append_column_head(
    writer: &mut DdlWriter<'_>,
    context: &TableContext<'_>,
    name: &str,
    data_type: &Type,
) {
    let quoted = writer.identifier(name).into_owned();
    let width = context.name_width;
    writer.append(&format!("{quoted:<width$} "));
    writer.append_type(data_type);
}

/// `constraint <name> `, or nothing for an unnamed constraint.
fn append_constraint_prefix(writer: &mut DdlWriter<'_>, name: &str) {
    if name.is_empty() {
        return;
    }
    writer.append("constraint ");
    writer.append_identifier(name);
    writer.append(" ");
}

/// Indented `[constraint <fk> ]references <target>[ on delete cascade]` line.
fn append_references(
    writer: &mut DdlWriter<'_>,
    context: &TableContext<'_>,
    column: &str,
    target: &str,
    cascade_delete: bool,
) {
    let fk_name = context
        .naming
        .foreign_key_constraint_name(context.table, target, column);

    writer.indent(|writer| {
        append_constraint_prefix(writer, &fk_name);
        writer.append("references ");
        writer.append_identifier(target);
        if cascade_delete {
            writer.append(" on delete cascade");
        }
    });
}
