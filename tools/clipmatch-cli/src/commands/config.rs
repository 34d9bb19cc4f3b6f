//! Show or persist the effective configuration.

use std::path::Path;

use anyhow::Context;
use clipmatch_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    if init {
        let target = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);
        config
            .save_to(&target)
            .with_context(|| format!("Failed to write config to {}", target.display()))?;
        tracing::info!(path = %target.display(), "Config written");
        println!("Wrote {}", target.display());
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
