//! Loading the calculator configuration from a TOML file.
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! bound_policy = "reject"
//! default_tip_percent = 18
//! max_tip_percent = 40
//! max_people = 40
//! presets = [10, 12.5, 15, 20]
//! tip_step = 0.5
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use tip_core::TipConfig;
use tracing::{debug, info};

/// Parses and validates a TOML configuration document.
pub fn parse_config(text: &str) -> Result<TipConfig> {
    let config: TipConfig = toml::from_str(text).context("malformed tip configuration")?;
    config.validate().context("invalid tip configuration")?;
    Ok(config)
}

/// Loads the configuration from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<TipConfig> {
    let Some(path) = path else {
        debug!("no config file given; using defaults");
        return Ok(TipConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file '{}'", path.display()))?;
    let config =
        parse_config(&text).with_context(|| format!("in config file '{}'", path.display()))?;

    info!(path = %path.display(), policy = ?config.bound_policy, "loaded tip configuration");
    Ok(config)
}
