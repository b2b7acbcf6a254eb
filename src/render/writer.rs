//! Indentation-aware text buffer used by every DDL renderer.
//!
//! Callers think in nesting levels, never in literal spaces. Identifier and type
//! quoting goes through the writer so nothing else has to know the dialect's
//! quoting rules.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Deref, DerefMut};

use itertools::Itertools;

use crate::constants::INDENT_UNIT;
use crate::model::Type;
use crate::render::dialect::Dialect;

pub struct DdlWriter<'d> {
    dialect: &'d dyn Dialect,
    ddl: String,
    indent: usize,
    at_start_of_line: bool,
}

impl<'d> DdlWriter<'d> {
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        Self {
            dialect,
            ddl: String::new(),
            indent: 0,
            at_start_of_line: true,
        }
    }

    pub fn dialect(&self) -> &'d dyn Dialect {
        self.dialect
    }

    pub fn is_at_start_of_line(&self) -> bool {
        self.at_start_of_line
    }

    pub fn indent_level(&self) -> usize {
        self.indent
    }

    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        if self.at_start_of_line {
            self.ddl.push_str(&INDENT_UNIT.repeat(self.indent));
        }

        self.ddl.push_str(text);
        self.at_start_of_line = text.ends_with('\n');
    }

    pub fn append_line(&mut self, text: &str) {
        self.append(text);
        self.new_line();
    }

    pub fn new_line(&mut self) {
        self.append("\n");
    }

    /// Enter one indentation level until the returned guard is dropped.
    ///
    /// Indented text always starts on a fresh line, so a pending line is ended first.
    pub fn indent_scope(&mut self) -> IndentScope<'_, 'd> {
        if !self.at_start_of_line {
            self.new_line();
        }
        self.indent += 1;
        IndentScope { writer: self }
    }

    pub fn indent(&mut self, block: impl FnOnce(&mut Self)) {
        let mut scope = self.indent_scope();
        block(&mut *scope);
    }

    pub fn append_indented(&mut self, text: &str) {
        self.indent(|writer| writer.append(text));
    }

    pub fn append_indented_line(&mut self, text: &str) {
        self.indent(|writer| {
            writer.append(text);
            writer.new_line();
        });
    }

    /// Terminate a statement and leave one blank line before the next.
    pub fn end_statement(&mut self) {
        let separator = self.dialect.statement_separator();
        self.append(separator);
        self.new_line();
        self.new_line();
    }

    pub fn line_comment(&mut self, text: &str) {
        self.append_line(&format!("-- {text}"));
    }

    pub fn identifier<'a>(&self, name: &'a str) -> Cow<'a, str> {
        self.dialect.quote_identifier(name)
    }

    pub fn append_identifier(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.append(&quoted);
    }

    /// Quoted identifiers joined with `, `.
    pub fn identifier_list<S: AsRef<str>>(&self, names: &[S]) -> String {
        names
            .iter()
            .map(|name| self.dialect.quote_identifier(name.as_ref()))
            .join(", ")
    }

    pub fn type_name(&self, data_type: &Type) -> String {
        let name = self.dialect.quote_identifier(&data_type.name);
        if data_type.dimensions.is_empty() {
            name.into_owned()
        } else {
            format!("{}({})", name, data_type.dimensions.join(", "))
        }
    }

    pub fn append_type(&mut self, data_type: &Type) {
        let rendered = self.type_name(data_type);
        self.append(&rendered);
    }

    pub fn finish(self) -> String {
        self.ddl
    }
}

impl fmt::Display for DdlWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ddl)
    }
}

/// Guard returned by [`DdlWriter::indent_scope`]; restores the level on drop.
pub struct IndentScope<'w, 'd> {
    writer: &'w mut DdlWriter<'d>,
}

impl<'d> Deref for IndentScope<'_, 'd> {
    type Target = DdlWriter<'d>;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for IndentScope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl Drop for IndentScope<'_, '_> {
    fn drop(&mut self) {
        self.writer.indent -= 1;
    }
}
