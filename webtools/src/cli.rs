// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{Config, resolve_config};
use crate::core::meta_tags::{
    description_hint, description_length, generate, keyword_count, title_hint, title_length,
    validate_required,
};
use crate::core::percentage::compute_from_str;
use crate::core::search::{builtin_catalog, load_catalog, search};
use crate::models::{
    CalculationMode, CalculationResult, LengthHint, MetaTagDocument, MetaTagFields, Theme,
    ToolCard,
};
use crate::utils::format_number;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file (defaults to ./webtools.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(short, long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a percentage calculation (modes: of, what, change, difference)
    Percent {
        mode: CalculationMode,
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Generate SEO, Open Graph and Twitter Card meta tags
    Meta(MetaArgs),

    /// Search the tool catalog by name, description or category
    Search {
        term: String,

        /// YAML tool catalog (overrides the config file)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Resolve the colour theme from a saved preference
    Theme {
        /// Previously saved preference ("dark" or "light")
        #[arg(long)]
        saved: Option<String>,

        /// The system prefers a dark colour scheme
        #[arg(long)]
        prefers_dark: bool,

        /// Flip the resolved theme
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct MetaArgs {
    /// Page title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Meta description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Comma-separated keywords
    #[arg(long, default_value = "")]
    pub keywords: String,

    /// Canonical page URL
    #[arg(long, default_value = "")]
    pub url: String,

    /// Social preview image URL
    #[arg(long, default_value = "")]
    pub image: String,

    /// Author name
    #[arg(long, default_value = "")]
    pub author: String,

    /// Leave out the basic SEO block
    #[arg(long)]
    pub no_seo: bool,

    /// Leave out the Open Graph block
    #[arg(long)]
    pub no_og: bool,

    /// Leave out the Twitter Card block
    #[arg(long)]
    pub no_twitter: bool,

    /// Leave out the viewport tag
    #[arg(long)]
    pub no_viewport: bool,

    /// Generate even when the title or description is blank
    #[arg(long)]
    pub allow_blank: bool,
}

impl MetaArgs {
    fn to_fields(&self, config: &Config) -> MetaTagFields {
        MetaTagFields {
            title: self.title.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            url: self.url.clone(),
            image: self.image.clone(),
            author: self.author.clone(),
            include_seo: config.meta.seo && !self.no_seo,
            include_open_graph: config.meta.open_graph && !self.no_og,
            include_twitter: config.meta.twitter && !self.no_twitter,
            include_viewport: config.meta.viewport && !self.no_viewport,
        }
    }
}

#[derive(Serialize)]
struct MetaReport<'a> {
    #[serde(flatten)]
    document: &'a MetaTagDocument,
    title_length: usize,
    title_hint: LengthHint,
    description_length: usize,
    description_hint: LengthHint,
    keyword_count: usize,
}

#[derive(Serialize)]
struct ThemeReport {
    theme: Theme,
    status: &'static str,
}

/// Parses configuration relative to the current directory and prints the
/// output of the selected command.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration or tool catalog cannot be loaded
/// * The command's input fails validation
/// * JSON serialization fails
pub fn run(args: Args) -> Result<()> {
    let cwd = env::current_dir()?;
    let output = execute(&args, &cwd)?;
    println!("{output}");
    Ok(())
}

/// Runs the selected command and returns what it would print.
///
/// # Errors
///
/// See [`run`].
pub fn execute(args: &Args, dir: &Path) -> Result<String> {
    match &args.command {
        Command::Percent { mode, a, b } => {
            let result = compute_from_str(*mode, a, b)?;
            if args.json {
                Ok(serde_json::to_string_pretty(&result)?)
            } else {
                Ok(render_calculation(&result))
            }
        }
        Command::Meta(meta) => {
            let config = resolve_config(args.config.as_deref(), dir)?;
            let fields = meta.to_fields(&config);
            if !meta.allow_blank {
                validate_required(&fields)?;
            }
            let document = generate(&fields);
            let report = MetaReport {
                document: &document,
                title_length: title_length(&fields.title),
                title_hint: title_hint(&fields.title),
                description_length: description_length(&fields.description),
                description_hint: description_hint(&fields.description),
                keyword_count: keyword_count(&fields.keywords),
            };
            if args.json {
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(render_meta(&report))
            }
        }
        Command::Search { term, catalog } => {
            let catalog = match catalog {
                Some(path) => Some(path.clone()),
                None => resolve_config(args.config.as_deref(), dir)?.search.catalog,
            };
            let cards = match catalog {
                Some(path) => load_catalog(&dir.join(path))?,
                None => builtin_catalog()?,
            };
            let results = search(&cards, term);
            if args.json {
                Ok(serde_json::to_string_pretty(&results)?)
            } else {
                Ok(render_search(term.trim(), &results))
            }
        }
        Command::Theme {
            saved,
            prefers_dark,
            toggle,
        } => {
            let mut theme = Theme::resolve(saved.as_deref(), *prefers_dark);
            if *toggle {
                theme = theme.toggle();
            }
            if args.json {
                Ok(serde_json::to_string_pretty(&ThemeReport {
                    theme,
                    status: theme.status_label(),
                })?)
            } else {
                Ok(format!("{theme} (dark mode {})", theme.status_label()))
            }
        }
    }
}

fn render_calculation(result: &CalculationResult) -> String {
    let mut out = format!("Result: {}\n{}\n", result.display_value(), result.explanation);
    if result.shows_secondary() {
        out.push_str(&format!(
            "Additional: {}\n{}\n",
            format_number(result.secondary_value),
            result.secondary_explanation
        ));
    }
    out.push_str(&result.formula);
    out
}

fn render_meta(report: &MetaReport<'_>) -> String {
    let hint = |h: LengthHint| match h {
        LengthHint::Recommended => "recommended",
        LengthHint::OutOfRange => "outside recommended range",
    };
    format!(
        "{}\n\nDomain: {}\nTitle: {} characters ({})\nDescription: {} characters ({})\nKeywords: {}",
        report.document.code,
        report.document.domain,
        report.title_length,
        hint(report.title_hint),
        report.description_length,
        hint(report.description_hint),
        report.keyword_count,
    )
}

fn render_search(term: &str, results: &[&ToolCard]) -> String {
    if term.is_empty() {
        return String::new();
    }
    if results.is_empty() {
        return format!(
            "No tools found for \"{term}\"\nTry searching for: PDF, image, SEO, calculator, AI, etc."
        );
    }

    let mut out: String = results
        .iter()
        .map(|card| {
            format!(
                "{}  [{}]\n  {}\n  {}\n",
                card.name,
                card.category,
                card.summary(),
                card.link
            )
        })
        .collect();
    out.push_str(&format!("View all {} matching tools", results.len()));
    out
}
