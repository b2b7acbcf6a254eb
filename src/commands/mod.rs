pub mod render;
pub mod validate;

// Re-export all command functions
pub use render::{cmd_render, render_config};
pub use validate::cmd_validate;
