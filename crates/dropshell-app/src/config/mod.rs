//! Configuration file parsing for dropshell
//!
//! Reads `<config_dir>/dropshell/config.toml`, or the file given with
//! `--config`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, CONFIG_DIR, CONFIG_FILENAME};
pub use types::*;
