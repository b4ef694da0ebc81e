// src/config.rs
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "plans.md";
pub const DEFAULT_OUTPUT: &str = "output.json";

/// Resolved paths for one run. Built once from the CLI and passed down;
/// nothing below `main` reads arguments or the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl RunConfig {
    /// Missing or empty arguments fall back to `plans.md` / `output.json`.
    pub fn from_args(input: Option<String>, output: Option<String>) -> Self {
        Self {
            input_path: or_default(input, DEFAULT_INPUT),
            output_path: or_default(output, DEFAULT_OUTPUT),
        }
    }
}

fn or_default(arg: Option<String>, default: &str) -> PathBuf {
    match arg {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let config = RunConfig::from_args(None, None);
        assert_eq!(config.input_path, PathBuf::from("plans.md"));
        assert_eq!(config.output_path, PathBuf::from("output.json"));
    }

    #[test]
    fn test_empty_argument_uses_default() {
        let config = RunConfig::from_args(Some(String::new()), Some("out.json".to_string()));
        assert_eq!(config.input_path, PathBuf::from("plans.md"));
        assert_eq!(config.output_path, PathBuf::from("out.json"));
    }
}
