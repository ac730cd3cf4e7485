// src/lib.rs
//! Pure logic behind the web-tools site: the percentage calculator, the meta
//! tag generator, tool search and theme resolution, plus a command-line
//! front end over them.
//!
//! Every engine function is a pure function of its arguments, so it is safe
//! to call from any number of threads without synchronization.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, Command, MetaArgs, execute, run};
pub use config::{Config, resolve_config};
pub use crate::core::meta_tags::{
    description_length, extract_domain, generate, keyword_count, title_length, validate_required,
};
pub use crate::core::percentage::{compute, compute_from_str};
pub use crate::core::search::{builtin_catalog, load_catalog, search};
pub use error::ValidationError;
pub use models::{
    Calculation, CalculationMode, CalculationResult, LengthHint, MetaTagDocument, MetaTagFields,
    Theme, ToolCard,
};
pub use utils::{escape_html, format_number};
