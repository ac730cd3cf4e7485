// src/core.rs
pub mod meta_tags;
pub mod percentage;
pub mod search;
