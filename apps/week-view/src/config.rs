//! TOML grid configuration.
//!
//! ```toml
//! day_start_minutes = 480    # 08:00
//! day_end_minutes   = 1320   # 22:00
//! week_starts_on    = "Mon"
//! ```
//!
//! Every key is optional; missing keys take `GridConfig::default()` values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use rg_core::GridConfig;

/// Parse and validate a grid configuration from TOML text.
pub fn parse_grid_config(text: &str) -> Result<GridConfig> {
    let config: GridConfig = toml::from_str(text).context("failed to parse grid config")?;
    config.validate()?;
    Ok(config)
}

/// Load a grid configuration file, or the defaults when `path` is `None`.
pub fn load_grid_config(path: Option<&Path>) -> Result<GridConfig> {
    let Some(path) = path else {
        return Ok(GridConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = parse_grid_config(&text)?;
    tracing::info!(path = %path.display(), "loaded grid config");
    Ok(config)
}
