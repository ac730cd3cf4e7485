// src/models/tool_card.rs
use serde::{Deserialize, Serialize};

const SUMMARY_CHARS: usize = 70;

/// One entry of the tool catalog shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolCard {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub link: String,
}

impl ToolCard {
    /// Shortened description used in the search dropdown.
    #[must_use]
    pub fn summary(&self) -> String {
        let head: String = self.description.chars().take(SUMMARY_CHARS).collect();
        format!("{head}...")
    }

    /// Case-insensitive match against name, description or category.
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
