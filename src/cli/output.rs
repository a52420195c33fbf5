//! Output formatting utilities for CLI

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Write `value` to `out` as pretty JSON, or as whatever `text_formatter` makes of it
pub fn write_formatted<W, T, F>(
    out: &mut W,
    value: &T,
    format: OutputFormat,
    text_formatter: F,
) -> Result<()>
where
    W: Write,
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    let rendered = match format {
        OutputFormat::Text => text_formatter(value),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    };
    writeln!(out, "{}", rendered)?;
    Ok(())
}

/// [`write_formatted`] to stdout. Failures are reported on stderr.
pub fn print_formatted<T, F>(value: &T, format: OutputFormat, text_formatter: F)
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    let stdout = std::io::stdout();
    if let Err(e) = write_formatted(&mut stdout.lock(), value, format, text_formatter) {
        tracing::error!("Failed to write output: {:#}", e);
        print_error(&format!("Failed to write output: {}", e));
    }
}

/// Print a progress or confirmation line to stderr (suppressed in quiet mode).
///
/// Goes to stderr so stdout stays clean for posts and JSON.
pub fn print_status(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", message);
    }
}

/// Print an error message (never suppressed)
pub fn print_error(message: &str) {
    eprintln!("Error: {}", message);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_text_uses_formatter() {
        let mut out = Vec::new();
        write_formatted(&mut out, &vec!["a", "b"], OutputFormat::Text, |v| v.join("+")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a+b\n");
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let mut out = Vec::new();
        write_formatted(&mut out, &vec!["a"], OutputFormat::Json, |_| unreachable!()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\n  \"a\"\n]\n");
    }

    #[test]
    fn test_unserializable_value_is_an_error() {
        // JSON object keys must be strings
        let value: HashMap<Vec<u8>, u32> = HashMap::from([(vec![1], 1)]);
        let mut out = Vec::new();

        let err = write_formatted(&mut out, &value, OutputFormat::Json, |_| String::new());

        assert!(err.is_err());
        assert!(out.is_empty());
    }
}
