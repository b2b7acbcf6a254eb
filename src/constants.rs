// Configuration file name
pub const CONFIG_FILENAME: &str = "ddlforge.yaml";

// Environment variable consulted when no dialect is configured
pub const DIALECT_ENV_VAR: &str = "DDLFORGE_DIALECT";

// One level of indentation in rendered DDL
pub const INDENT_UNIT: &str = "    ";

// Schema file extensions accepted by the loader
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
pub const JSON_EXTENSIONS: &[&str] = &["json"];
