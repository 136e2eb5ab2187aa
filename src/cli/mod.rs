//! CLI command implementations

pub mod delete;
pub mod get;
pub mod set;
pub mod show;

use crate::Result;
use std::env;
use std::path::PathBuf;

/// State file used when no --file override is given
pub const DEFAULT_STATE_FILE: &str = ".state.yaml";

/// Resolve the state file path from an optional --file override,
/// falling back to `.state.yaml` in the current directory.
pub fn resolve_state_path(file: Option<&str>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(env::current_dir()?.join(DEFAULT_STATE_FILE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_path() {
        let path = resolve_state_path(Some("/tmp/container-state.yaml")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/container-state.yaml"));
    }

    #[test]
    fn test_resolve_default_path() {
        let path = resolve_state_path(None).unwrap();
        assert!(path.ends_with(DEFAULT_STATE_FILE));
        assert!(path.is_absolute());
    }
}
