//!
//! This module provides initialization utilities, such as creating a default
//! configuration file.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for initialization operations
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to access file {path}: {source}")]
    IoError { source: io::Error, path: String },
}

/// Create a default configuration file at the specified path.
///
/// Returns `true` if the file was created, or `false` if it already exists.
///
/// # Errors
///
/// Returns an error if the file cannot be created due to permissions or other I/O errors.
pub fn create_default_config(path: &str) -> Result<bool, InitError> {
    if Path::new(path).exists() {
        return Ok(false);
    }

    let default_config = r#"# codefmt configuration file

[format]
# Target language when none is given and detection is skipped
language = "javascript"
# Indentation: "tab", "2space" or "4space"
indent = "2space"
# Maximum line width: "no", "80", "120" or "160"
max_line_length = "120"
# Brace placement: "collapse", "expand" or "end-expand"
brace_style = "collapse"
# Terminate statements with semicolons
semi = false
# Prefer single quotes
single_quote = true
# Trailing commas: "none", "es5" or "all"
trailing_comma = "es5"
# Arrow function parentheses: "avoid" or "always"
arrow_parens = "always"
# Prefer single quotes in JSX
jsx_single_quote = false
# Object property quoting: "as-needed", "consistent" or "preserve"
quote_props = "as-needed"

[printer]
# External pretty-printer command; the source is piped over stdin
command = "prettier"
"#;

    fs::write(path, default_config)
        .map_err(|source| InitError::IoError { source, path: path.to_string() })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn creates_a_parseable_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".codefmt.toml");
        let path_str = path.to_str().unwrap();

        assert!(create_default_config(path_str).unwrap());
        // Second call is a no-op
        assert!(!create_default_config(path_str).unwrap());

        let config = Config::load(Some(path_str)).unwrap();
        assert_eq!(config, Config::default());
    }
}
