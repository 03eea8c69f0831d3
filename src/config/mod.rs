//! Configuration loading for linkwave
//!
//! Crawl parameters come from a YAML or JSON document with a flat key set;
//! missing keys default to zero values and unknown keys are ignored.

mod parser;
mod types;

pub use parser::{from_json, from_yaml, load_config};
pub use types::CrawlConfig;
