//! Initialize lbtas in a directory

use std::path::Path;

use lbtas::config::Config;
use lbtas::output::{OperationResult, OutputMode};
use lbtas::paths;

/// Write a default `.lbtas.toml` into `dir`
pub fn init(dir: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = paths::project_config(dir);

    if config_path.exists() && !force {
        OperationResult {
            success: true,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                paths::PROJECT_CONFIG
            ),
        }
        .render(mode);
        return Ok(());
    }

    Config::default().save(&config_path)?;

    OperationResult {
        success: true,
        message: format!("Created {}", paths::PROJECT_CONFIG),
    }
    .render(mode);
    Ok(())
}
