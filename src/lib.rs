//! Render typed relational schema models into SQL DDL.
//!
//! Build a [`model::Schema`] with [`builder::SchemaBuilder`] (or load one with
//! [`schema_loader::load_schema_file`]) and hand it to [`render::render_schema`]
//! together with a [`render::Dialect`] and an optional
//! [`render::NamingStrategy`].

pub mod builder;
pub mod commands;
pub mod config;
pub mod constants;
pub mod model;
pub mod render;
pub mod schema_loader;
pub mod validation;

pub use model::{ModelError, Schema, Table};
pub use render::{
    DefaultNaming, Dialect, DialectKind, NamingKind, NamingStrategy, RenderOptions,
    SqlServerDialect, SqliteDialect, UnnamedConstraints, render_schema, render_schema_with,
};
