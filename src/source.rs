use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Read;

use crate::cli::Cli;
use crate::types::Item;

/// Load the item list: file first, then inline JSON, then standard input.
pub fn load_items(cli: &Cli) -> Result<Vec<Item>> {
    let data = if let Some(path) = &cli.examples_file {
        fs::read(path).with_context(|| format!("reading examples file '{}'", path.display()))?
    } else if let Some(json) = cli.examples_json.as_deref().filter(|s| !s.is_empty()) {
        json.as_bytes().to_vec()
    } else {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("reading examples from stdin")?;
        buf
    };
    let items = parse_items(&data)?;
    for item in &items {
        tracing::debug!(
            ordinal = item.ordinal,
            name = %item.name,
            category = %item.category,
            path = ?item.path,
            "example"
        );
    }
    Ok(items)
}

pub fn parse_items(data: &[u8]) -> Result<Vec<Item>> {
    if data.iter().all(u8::is_ascii_whitespace) {
        bail!("No examples data provided");
    }
    let items: Vec<Item> = serde_json::from_slice(data).context("parsing examples")?;
    if items.is_empty() {
        bail!("No examples provided");
    }
    Ok(items)
}
