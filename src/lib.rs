// src/lib.rs

pub mod config;
pub mod fetch;
pub mod output;
pub mod parse;
pub mod pipeline;

pub use config::{ScrapeConfig, DEFAULT_URL};
pub use fetch::{HttpSource, PageSource};
pub use output::OutputFormat;
pub use parse::Row;
pub use pipeline::Outcome;
