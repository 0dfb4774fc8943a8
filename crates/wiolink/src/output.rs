//! Output formatting: JSON, compact JSON, YAML.
//!
//! Payloads are opaque `serde_json::Value`s, printed as the server sent them.

use std::io::{self, Write};

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Render a decoded payload in the chosen format.
pub fn render(format: &OutputFormat, data: &Value) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", output.trim_end());
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn compact_json_is_single_line() {
        let out = render(&OutputFormat::JsonCompact, &json!({ "led": 1 })).unwrap();
        assert_eq!(out, r#"{"led":1}"#);
    }

    #[test]
    fn pretty_json_is_indented() {
        let out = render(&OutputFormat::Json, &json!({ "led": 1 })).unwrap();
        assert_eq!(out, "{\n  \"led\": 1\n}");
    }

    #[test]
    fn yaml_output() {
        let out = render(&OutputFormat::Yaml, &json!({ "led": 1 })).unwrap();
        assert_eq!(out.trim_end(), "led: 1");
    }
}
