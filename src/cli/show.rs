use crate::state::StateFile;
use crate::{Context, Result};
use colored::Colorize;

/// Dump the full state mapping.
pub fn run(file: Option<&str>, json: bool) -> Result<()> {
    let statefile = StateFile::new(super::resolve_state_path(file)?);

    let data = statefile.load()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&data).context("Failed to render state as JSON")?
        );
        return Ok(());
    }

    if data.is_empty() {
        println!(
            "{}",
            format!("State file {} is empty", statefile.path().display()).yellow()
        );
    } else {
        println!(
            "{}",
            format!("📋 State in {}:", statefile.path().display()).cyan()
        );
        print!(
            "{}",
            serde_yaml::to_string(&data).context("Failed to render state as YAML")?
        );
    }

    Ok(())
}
