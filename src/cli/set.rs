use crate::state::StateFile;
use crate::{Context, Result};
use colored::Colorize;
use serde_yaml::Value;

/// Parse `raw_value` as YAML and store it under `key`.
pub fn run(key: &str, raw_value: &str, file: Option<&str>) -> Result<()> {
    let statefile = StateFile::new(super::resolve_state_path(file)?);

    let value = parse_value(raw_value)
        .with_context(|| format!("Invalid YAML value: {}", raw_value))?;
    statefile.set(key, value)?;

    println!(
        "{}",
        format!("✅ Set '{}' in {}", key, statefile.path().display()).green()
    );

    Ok(())
}

/// Parse a CLI argument as a YAML value, so `3` stores a number, `true` a
/// boolean, `[a, b]` a sequence, and a bare word a string. Quote the value
/// twice (e.g. '"2024.1"') to force string typing.
///
/// An empty or whitespace-only argument is stored verbatim as a string;
/// the YAML parser rejects empty input, and `set k ""` plainly means the
/// empty string.
fn parse_value(raw: &str) -> Result<Value, serde_yaml::Error> {
    if raw.trim().is_empty() {
        return Ok(Value::String(raw.to_string()));
    }
    serde_yaml::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_word_as_string() {
        assert_eq!(parse_value("v1").unwrap(), Value::String("v1".to_string()));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_value("3").unwrap(), Value::Number(3.into()));
    }

    #[test]
    fn test_parse_boolean() {
        assert_eq!(parse_value("true").unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_parse_quoted_number_as_string() {
        assert_eq!(
            parse_value("\"2024.1\"").unwrap(),
            Value::String("2024.1".to_string())
        );
    }

    #[test]
    fn test_parse_empty_argument_as_empty_string() {
        assert_eq!(parse_value("").unwrap(), Value::String(String::new()));
    }

    #[test]
    fn test_parse_whitespace_argument_verbatim() {
        assert_eq!(parse_value("  ").unwrap(), Value::String("  ".to_string()));
    }

    #[test]
    fn test_parse_flow_sequence() {
        let value = parse_value("[8080, 8443]").unwrap();
        assert!(matches!(value, Value::Sequence(ref s) if s.len() == 2));
    }
}
