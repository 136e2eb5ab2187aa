use crate::state::StateFile;
use crate::Result;
use colored::Colorize;

/// Remove `key` from the state file. Deleting an absent key succeeds.
pub fn run(key: &str, file: Option<&str>) -> Result<()> {
    let statefile = StateFile::new(super::resolve_state_path(file)?);

    statefile.delete(key)?;

    println!(
        "{}",
        format!("🗑 Removed '{}' from {}", key, statefile.path().display()).green()
    );

    Ok(())
}
