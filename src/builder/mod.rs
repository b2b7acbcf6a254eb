//! Fluent construction of schema models.
//!
//! ```rust
//! use ddlforge::builder::{SchemaBuilder, foreign_key_to, identity, varchar};
//!
//! let mut schema = SchemaBuilder::new();
//! let users = schema.table("users", None, |t| {
//!     t.primary_key("id", identity());
//!     t.required("name", varchar(100));
//!     t.unique_index(None, &["name"], &[], None);
//! });
//! let owner = foreign_key_to(&users, true).unwrap();
//! schema.table("profile", Some("One row per user"), |t| {
//!     t.primary_key_ref("user_id", owner);
//!     t.optional("bio", varchar(500)).comment("shown on the profile page");
//! });
//! let schema = schema.build();
//! assert_eq!(schema.tables.len(), 2);
//! ```

pub mod types;

pub use types::*;

use crate::model::{
    AnyColumn, CheckConstraint, Column, ColumnConstraint, ColumnSpec, ComputedColumn, ForeignKey,
    Index, ModelError, PrimaryKey, Schema, Table, Type,
};

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    tables: Vec<Table>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table and return a copy of it, so later tables can reference it.
    pub fn table(
        &mut self,
        name: &str,
        comment: Option<&str>,
        init: impl FnOnce(&mut TableBuilder),
    ) -> Table {
        let mut builder = TableBuilder::new(name, comment);
        init(&mut builder);
        self.push(builder.build())
    }

    /// Like [`SchemaBuilder::table`], for initializers that can fail.
    pub fn try_table(
        &mut self,
        name: &str,
        comment: Option<&str>,
        init: impl FnOnce(&mut TableBuilder) -> Result<(), ModelError>,
    ) -> Result<Table, ModelError> {
        let mut builder = TableBuilder::new(name, comment);
        init(&mut builder)?;
        Ok(self.push(builder.build()))
    }

    fn push(&mut self, table: Table) -> Table {
        self.tables.push(table.clone());
        table
    }

    pub fn build(self) -> Schema {
        Schema::new(self.tables)
    }
}

#[derive(Debug)]
pub struct TableBuilder {
    name: String,
    comment: Option<String>,
    primary_key: Option<PrimaryKey>,
    columns: Vec<AnyColumn>,
    indices: Vec<Index>,
    checks: Vec<CheckConstraint>,
    uniques: Vec<Vec<String>>,
}

impl TableBuilder {
    pub fn new(name: &str, comment: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            comment: comment.map(str::to_string),
            primary_key: None,
            columns: vec![],
            indices: vec![],
            checks: vec![],
            uniques: vec![],
        }
    }

    pub fn primary_key(&mut self, name: &str, spec: ColumnSpec) {
        self.primary_key = Some(PrimaryKey::Single(Column {
            name: name.to_string(),
            spec,
            nullable: false,
            foreign_key: None,
        }));
    }

    pub fn primary_key_ref(&mut self, name: &str, foreign_key: ForeignKey) {
        self.primary_key = Some(PrimaryKey::ForeignKeyRef {
            name: name.to_string(),
            foreign_key,
        });
    }

    pub fn composite_primary_key(&mut self, columns: &[&str]) {
        self.primary_key = Some(PrimaryKey::Composite(to_strings(columns)));
    }

    pub fn required(&mut self, name: &str, spec: ColumnSpec) -> ColumnBuilder<'_> {
        self.push_column(name, spec, false, None)
    }

    pub fn optional(&mut self, name: &str, spec: ColumnSpec) -> ColumnBuilder<'_> {
        self.push_column(name, spec, true, None)
    }

    /// Non-null column referencing another table; its type is the key's type.
    pub fn required_ref(&mut self, name: &str, foreign_key: ForeignKey) -> ColumnBuilder<'_> {
        let spec = ColumnSpec::new(foreign_key.data_type.clone());
        self.push_column(name, spec, false, Some(foreign_key))
    }

    pub fn optional_ref(&mut self, name: &str, foreign_key: ForeignKey) -> ColumnBuilder<'_> {
        let spec = ColumnSpec::new(foreign_key.data_type.clone());
        self.push_column(name, spec, true, Some(foreign_key))
    }

    pub fn computed(&mut self, name: &str, expression: &str) {
        self.columns.push(AnyColumn::Computed(ComputedColumn {
            name: name.to_string(),
            expression: expression.to_string(),
        }));
    }

    pub fn index(
        &mut self,
        name: Option<&str>,
        columns: &[&str],
        include: &[&str],
        filter: Option<&str>,
    ) {
        self.push_index(name, columns, include, filter, false);
    }

    pub fn unique_index(
        &mut self,
        name: Option<&str>,
        columns: &[&str],
        include: &[&str],
        filter: Option<&str>,
    ) {
        self.push_index(name, columns, include, filter, true);
    }

    pub fn check(&mut self, name: &str, condition: &str) {
        self.checks.push(CheckConstraint {
            name: name.to_string(),
            condition: condition.to_string(),
        });
    }

    /// Table-level unique constraint over a group of columns.
    pub fn unique(&mut self, columns: &[&str]) {
        self.uniques.push(to_strings(columns));
    }

    /// Reference to the table under construction, for self-referencing columns.
    pub fn foreign_key_self(&self) -> Result<ForeignKey, ModelError> {
        let data_type = key_type(&self.name, self.primary_key.as_ref())?;
        Ok(foreign_key(&self.name, data_type.clone(), false))
    }

    pub fn build(self) -> Table {
        Table {
            name: self.name,
            comment: self.comment,
            primary_key: self.primary_key,
            columns: self.columns,
            indices: self.indices,
            checks: self.checks,
            uniques: self.uniques,
        }
    }

    fn push_column(
        &mut self,
        name: &str,
        spec: ColumnSpec,
        nullable: bool,
        foreign_key: Option<ForeignKey>,
    ) -> ColumnBuilder<'_> {
        self.columns.push(AnyColumn::Plain(Column {
            name: name.to_string(),
            spec,
            nullable,
            foreign_key,
        }));

        match self.columns.last_mut() {
            Some(AnyColumn::Plain(column)) => ColumnBuilder { column },
            _ => unreachable!("a plain column was just pushed"),
        }
    }

    fn push_index(
        &mut self,
        name: Option<&str>,
        columns: &[&str],
        include: &[&str],
        filter: Option<&str>,
        unique: bool,
    ) {
        self.indices.push(Index {
            name: name.map(str::to_string),
            columns: to_strings(columns),
            include: to_strings(include),
            filter: filter.map(str::to_string),
            unique,
        });
    }
}

/// Refines the column most recently added to a [`TableBuilder`].
pub struct ColumnBuilder<'a> {
    column: &'a mut Column,
}

impl ColumnBuilder<'_> {
    pub fn default(self, expression: &str) -> Self {
        self.column.spec.constraints.push(ColumnConstraint::Default {
            expression: expression.to_string(),
            name: None,
        });
        self
    }

    /// Default with an explicit constraint name, overriding the naming strategy.
    pub fn named_default(self, name: &str, expression: &str) -> Self {
        self.column.spec.constraints.push(ColumnConstraint::Default {
            expression: expression.to_string(),
            name: Some(name.to_string()),
        });
        self
    }

    pub fn comment(self, comment: &str) -> Self {
        self.column.spec.comment = Some(comment.to_string());
        self
    }

    pub fn unique(self) -> Self {
        self.column.spec.unique = true;
        self
    }
}

pub fn foreign_key(target: &str, data_type: Type, cascade_delete: bool) -> ForeignKey {
    ForeignKey {
        target: target.to_string(),
        data_type,
        cascade_delete,
    }
}

/// Reference to `target`'s primary key. Fails when the target has no
/// single-column primary key to take the type from.
pub fn foreign_key_to(target: &Table, cascade_delete: bool) -> Result<ForeignKey, ModelError> {
    let data_type = key_type(&target.name, target.primary_key.as_ref())?;
    Ok(foreign_key(&target.name, data_type.clone(), cascade_delete))
}

fn key_type<'a>(table: &str, primary_key: Option<&'a PrimaryKey>) -> Result<&'a Type, ModelError> {
    let primary_key = primary_key.ok_or_else(|| ModelError::MissingPrimaryKey {
        table: table.to_string(),
    })?;

    primary_key
        .column_type()
        .ok_or_else(|| ModelError::CompositeKeyReference {
            table: table.to_string(),
        })
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
