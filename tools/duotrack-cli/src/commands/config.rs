//! Show or persist the effective configuration.

use duotrack_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, write: bool) -> anyhow::Result<()> {
    println!("# {}", config_file_path().display());
    println!("{}", serde_json::to_string_pretty(config)?);

    if let Err(e) = config.validate() {
        println!("\nWarning: {e}");
    }

    if write {
        let path = config
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to write config: {e}"))?;
        println!("\nWrote {}", path.display());
    }

    Ok(())
}
