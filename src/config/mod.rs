//! Configuration module.
//!
//! Settings are resolved through the chain
//! Defaults → Config File → Env Vars → CLI Args.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};

/// Truecolor brand theme (default).
pub const THEME_ABSTRACT: &str = "abstract";

/// 16-color theme for terminals without truecolor support.
pub const THEME_ANSI: &str = "ansi";

/// All theme names accepted on the command line.
pub const THEME_NAMES: [&str; 2] = [THEME_ABSTRACT, THEME_ANSI];
