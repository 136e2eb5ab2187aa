use crate::state::StateFile;
use crate::{Context, Result};

/// Print the value stored under `key`.
///
/// An absent key prints nothing and still succeeds, so shell scripts can
/// probe for optional values without guarding against errors.
pub fn run(key: &str, file: Option<&str>, json: bool) -> Result<()> {
    let statefile = StateFile::new(super::resolve_state_path(file)?);

    if let Some(value) = statefile.get(key)? {
        if json {
            println!(
                "{}",
                serde_json::to_string(&value).context("Failed to render value as JSON")?
            );
        } else {
            print!(
                "{}",
                serde_yaml::to_string(&value).context("Failed to render value as YAML")?
            );
        }
    }

    Ok(())
}
