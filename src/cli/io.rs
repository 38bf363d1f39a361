//! Reading items and writing JSON results.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::collection::Item;
use crate::log;

/// Read an items array from `input` (`-` = stdin).
pub fn read_items(input: &Path) -> Result<Vec<Item>> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read items from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed to read items from {}", input.display()))?
    };

    parse_items(&content).with_context(|| format!("invalid items JSON in {}", input.display()))
}

/// Parse a JSON array of items.
pub fn parse_items(content: &str) -> Result<Vec<Item>> {
    Ok(serde_json::from_str(content)?)
}

/// Serialize `value` and write it to `output` or stdout.
pub fn write_output<T: Serialize + ?Sized>(
    value: &T,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let formatted = format_json(value, pretty)?;

    if let Some(output_path) = output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!("output"; "wrote {}", output_path.display());
    } else {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{formatted}")?;
    }

    Ok(())
}

fn format_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(formatted)
}
