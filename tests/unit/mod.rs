pub mod rendering;
pub mod schema_files;
