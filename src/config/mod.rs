//! Configuration module.
//!
//! Settings resolve through `defaults → config file → environment → CLI`.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, apply_overrides_from, default_config_path,
    default_log_path, load_config_file, load_config_with_precedence, merge_config, ConfigError,
    ConfigFile, ResolvedConfig, DEFAULT_TICK_MS, DEFAULT_TITLE, MIN_TICK_MS,
};

use crate::view::WindowOptions;

impl From<&ResolvedConfig> for WindowOptions {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            title: config.title.clone(),
            tick: config.tick(),
            mouse_capture: config.mouse_capture,
            report_key_events: config.report_key_events,
        }
    }
}
