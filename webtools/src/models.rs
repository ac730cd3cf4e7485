// src/models.rs
pub mod calculation;
pub mod calculation_result;
pub mod meta_tags;
pub mod theme;
pub mod tool_card;

pub use calculation::{Calculation, CalculationMode};
pub use calculation_result::CalculationResult;
pub use meta_tags::{LengthHint, MetaTagDocument, MetaTagFields};
pub use theme::Theme;
pub use tool_card::ToolCard;
