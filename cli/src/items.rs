use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

pub fn parse_items_csv(input: &str) -> Result<Vec<String>> {
    let items: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();
    if items.is_empty() {
        return Err(anyhow!("no items parsed from list"));
    }
    Ok(items)
}

/// One item per line; blank lines and `#` comments are skipped.
pub fn parse_items_file(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed reading item file {}", path.display()))?;
    let items: Vec<String> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect();
    if items.is_empty() {
        return Err(anyhow!("item file {} had no items", path.display()));
    }
    Ok(items)
}

pub fn resolve_items(csv: Option<&str>, file: Option<&Path>, flag: &str) -> Result<Vec<String>> {
    match (csv, file) {
        (Some(csv), None) => parse_items_csv(csv),
        (None, Some(path)) => parse_items_file(path),
        (Some(_), Some(_)) => Err(anyhow!("use either --{flag} or --{flag}-file, not both")),
        (None, None) => Err(anyhow!("--{flag} or --{flag}-file is required")),
    }
}
