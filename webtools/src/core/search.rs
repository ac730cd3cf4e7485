// src/core/search.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::models::ToolCard;

const BUILTIN_CATALOG: &str = include_str!("../../assets/tools.yaml");

/// Parses a YAML list of tool cards.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a card is missing a
/// required field.
pub fn parse_catalog(content: &str) -> Result<Vec<ToolCard>> {
    serde_yaml_ng::from_str(content).context("Failed to parse tool catalog")
}

/// Loads a tool catalog from a YAML file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not a valid catalog
pub fn load_catalog(path: &Path) -> Result<Vec<ToolCard>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tool catalog: {}", path.display()))?;
    let cards = parse_catalog(&content)
        .with_context(|| format!("Invalid tool catalog: {}", path.display()))?;
    debug!(cards = cards.len(), path = %path.display(), "loaded tool catalog");
    Ok(cards)
}

/// The catalog shipped with the site.
///
/// # Errors
///
/// Returns an error only if the bundled catalog is malformed.
pub fn builtin_catalog() -> Result<Vec<ToolCard>> {
    parse_catalog(BUILTIN_CATALOG)
}

/// Filters `cards` by a free-text term, keeping catalog order.
///
/// The term is trimmed and matched case-insensitively against each card's
/// name, description and category. A blank term matches nothing.
#[must_use]
pub fn search<'a>(cards: &'a [ToolCard], term: &str) -> Vec<&'a ToolCard> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let results: Vec<&ToolCard> = cards.iter().filter(|card| card.matches(&needle)).collect();
    debug!(term = %needle, matches = results.len(), "searched tools");
    results
}
