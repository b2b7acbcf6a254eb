use crate::config::types::*;
use crate::render::{DialectKind, NamingKind};

// Config and OutputConfig derive Default

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dialect: DialectKind::SqlServer,
            naming: NamingKind::Default,
            align_columns: true,
        }
    }
}
