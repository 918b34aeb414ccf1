//! Parse command implementation

use anyhow::{Context, Result};
use quire_core::Document;
use std::fs;

/// Parse markup into document JSON
pub fn parse(input: &str, output: Option<&str>) -> Result<()> {
    let markup = super::read_input(input)?;
    let document = Document::from_markup(&markup);
    let json = serde_json::to_string_pretty(&document)?;

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            tracing::info!("Parsed {} blocks -> {}", document.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
