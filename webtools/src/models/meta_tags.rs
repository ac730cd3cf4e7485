// src/models/meta_tags.rs
use serde::Serialize;
use std::ops::RangeInclusive;

pub const DEFAULT_TITLE: &str = "My Website";
pub const DEFAULT_DESCRIPTION: &str = "Description of my website";
pub const DEFAULT_KEYWORDS: &str = "website, web, internet";
pub const DEFAULT_URL: &str = "https://www.example.com/";
pub const DEFAULT_IMAGE: &str = "https://www.example.com/image.jpg";
pub const DEFAULT_AUTHOR: &str = "Website Author";

/// Recommended title length for search result snippets.
pub const TITLE_RECOMMENDED: RangeInclusive<usize> = 50..=60;
/// Recommended meta description length for search result snippets.
pub const DESCRIPTION_RECOMMENDED: RangeInclusive<usize> = 120..=155;

/// Raw form input for the meta tag generator. Blank strings are replaced by
/// their defaults when the snippet is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTagFields {
    pub title: String,
    pub description: String,
    /// Comma-separated.
    pub keywords: String,
    pub url: String,
    pub image: String,
    pub author: String,
    pub include_seo: bool,
    pub include_open_graph: bool,
    pub include_twitter: bool,
    pub include_viewport: bool,
}

impl Default for MetaTagFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            keywords: String::new(),
            url: String::new(),
            image: String::new(),
            author: String::new(),
            include_seo: true,
            include_open_graph: true,
            include_twitter: true,
            include_viewport: true,
        }
    }
}

impl MetaTagFields {
    /// The values the form is reset to, with every block enabled.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            title: String::from("My Awesome Website - Best Products & Services"),
            description: String::from(
                "Discover the best products and services on our awesome website. \
                 We offer quality solutions for your needs with excellent customer support.",
            ),
            keywords: String::from("website, products, services, solutions, quality"),
            url: String::from("https://www.example.com/page"),
            image: String::from("https://www.example.com/image.jpg"),
            author: String::from("John Doe"),
            ..Self::default()
        }
    }
}

/// A generated snippet plus the values shown in the search and social
/// previews. Preview fields have defaults applied but are not escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTagDocument {
    pub code: String,
    pub domain: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl MetaTagDocument {
    #[inline]
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.code.split('\n')
    }

    #[inline]
    #[must_use]
    pub fn is_comment_line(line: &str) -> bool {
        line.trim().starts_with("<!--")
    }
}

/// How a counted length compares with its recommended range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LengthHint {
    Recommended,
    OutOfRange,
}

impl LengthHint {
    #[inline]
    #[must_use]
    pub fn classify(len: usize, recommended: &RangeInclusive<usize>) -> Self {
        if recommended.contains(&len) {
            Self::Recommended
        } else {
            Self::OutOfRange
        }
    }
}
