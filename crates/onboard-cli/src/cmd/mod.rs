pub mod classify;
pub mod create;
pub mod monitor;
pub mod seed;

use anyhow::Context;
use onboard_core::config::MonitorConfig;
use std::path::Path;

/// Load `onboard.yaml` from the given path, or the default location.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<MonitorConfig> {
    let path = path.unwrap_or_else(|| Path::new(onboard_core::config::CONFIG_FILE));
    MonitorConfig::load(path).with_context(|| format!("failed to load {}", path.display()))
}
