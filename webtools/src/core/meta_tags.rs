// src/core/meta_tags.rs
use tracing::debug;

use crate::error::ValidationError;
use crate::models::meta_tags::{
    DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_IMAGE, DEFAULT_KEYWORDS, DEFAULT_TITLE,
    DEFAULT_URL, DESCRIPTION_RECOMMENDED, TITLE_RECOMMENDED,
};
use crate::models::{LengthHint, MetaTagDocument, MetaTagFields};
use crate::utils::escape_html;

/// Trimmed field values with defaults applied, not yet escaped.
struct Resolved<'a> {
    title: &'a str,
    description: &'a str,
    keywords: &'a str,
    url: &'a str,
    image: &'a str,
    author: &'a str,
}

impl<'a> Resolved<'a> {
    fn from_fields(fields: &'a MetaTagFields) -> Self {
        Self {
            title: or_default(&fields.title, DEFAULT_TITLE),
            description: or_default(&fields.description, DEFAULT_DESCRIPTION),
            keywords: or_default(&fields.keywords, DEFAULT_KEYWORDS),
            url: or_default(&fields.url, DEFAULT_URL),
            image: or_default(&fields.image, DEFAULT_IMAGE),
            author: or_default(&fields.author, DEFAULT_AUTHOR),
        }
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { default } else { trimmed }
}

/// Generates the meta tag snippet and preview values for `fields`.
///
/// Never fails: blank fields fall back to their defaults, and every
/// user-supplied value is HTML-escaped before it is embedded.
#[must_use]
pub fn generate(fields: &MetaTagFields) -> MetaTagDocument {
    let resolved = Resolved::from_fields(fields);
    let title = escape_html(resolved.title);
    let description = escape_html(resolved.description);
    let image = escape_html(resolved.image);
    let url = escape_html(resolved.url);

    let mut code = String::new();
    code.push_str("<!-- Character Encoding -->\n");
    code.push_str("<meta charset=\"UTF-8\">\n\n");

    if fields.include_viewport {
        code.push_str("<!-- Responsive Viewport -->\n");
        code.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\n",
        );
    }

    if fields.include_seo {
        code.push_str("<!-- Basic SEO Meta Tags -->\n");
        code.push_str(&format!("<title>{title}</title>\n"));
        code.push_str(&format!(
            "<meta name=\"description\" content=\"{description}\">\n"
        ));
        code.push_str(&format!(
            "<meta name=\"keywords\" content=\"{}\">\n",
            escape_html(resolved.keywords)
        ));
        code.push_str(&format!(
            "<meta name=\"author\" content=\"{}\">\n",
            escape_html(resolved.author)
        ));
        code.push_str("<meta name=\"robots\" content=\"index, follow\">\n\n");
    }

    if fields.include_open_graph {
        code.push_str("<!-- Open Graph Meta Tags (Facebook, LinkedIn, Pinterest) -->\n");
        code.push_str(&format!("<meta property=\"og:title\" content=\"{title}\">\n"));
        code.push_str(&format!(
            "<meta property=\"og:description\" content=\"{description}\">\n"
        ));
        code.push_str(&format!("<meta property=\"og:image\" content=\"{image}\">\n"));
        code.push_str(&format!("<meta property=\"og:url\" content=\"{url}\">\n"));
        code.push_str("<meta property=\"og:type\" content=\"website\">\n");
        code.push_str("<meta property=\"og:locale\" content=\"en_US\">\n");
        code.push_str("<meta property=\"og:site_name\" content=\"My Website\">\n\n");
    }

    if fields.include_twitter {
        code.push_str("<!-- Twitter Card Meta Tags -->\n");
        code.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");
        code.push_str(&format!("<meta name=\"twitter:title\" content=\"{title}\">\n"));
        code.push_str(&format!(
            "<meta name=\"twitter:description\" content=\"{description}\">\n"
        ));
        code.push_str(&format!("<meta name=\"twitter:image\" content=\"{image}\">\n"));
        code.push_str("<meta name=\"twitter:site\" content=\"@username\">\n");
        code.push_str("<meta name=\"twitter:creator\" content=\"@username\">\n");
    }

    code.push_str("\n<!-- Canonical URL -->\n");
    code.push_str(&format!("<link rel=\"canonical\" href=\"{url}\">"));

    let document = MetaTagDocument {
        domain: extract_domain(resolved.url).to_owned(),
        title: resolved.title.to_owned(),
        description: resolved.description.to_owned(),
        image: resolved.image.to_owned(),
        code,
    };
    debug!(
        lines = document.lines().count(),
        domain = %document.domain,
        "generated meta tags"
    );
    document
}

/// Strips a leading `http://` or `https://` and an optional `www.`, then
/// keeps everything up to the first `/`.
#[must_use]
pub fn extract_domain(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.split('/').next().unwrap_or(rest)
}

/// Refuses to generate for display when the title or description is blank.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first missing field.
pub fn validate_required(fields: &MetaTagFields) -> Result<(), ValidationError> {
    if fields.title.trim().is_empty() {
        return Err(ValidationError::new("Please enter a page title."));
    }
    if fields.description.trim().is_empty() {
        return Err(ValidationError::new("Please enter a meta description."));
    }
    Ok(())
}

#[inline]
#[must_use]
pub fn title_length(title: &str) -> usize {
    title.chars().count()
}

#[inline]
#[must_use]
pub fn description_length(description: &str) -> usize {
    description.chars().count()
}

/// Number of non-empty comma-separated keywords.
#[must_use]
pub fn keyword_count(keywords: &str) -> usize {
    keywords
        .split(',')
        .filter(|keyword| !keyword.trim().is_empty())
        .count()
}

#[inline]
#[must_use]
pub fn title_hint(title: &str) -> LengthHint {
    LengthHint::classify(title_length(title), &TITLE_RECOMMENDED)
}

#[inline]
#[must_use]
pub fn description_hint(description: &str) -> LengthHint {
    LengthHint::classify(description_length(description), &DESCRIPTION_RECOMMENDED)
}
