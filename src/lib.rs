// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;

pub mod file;
pub mod logging;
pub mod progress;
pub mod scrape;
pub mod store;

pub use data::{Entity, EntityType, Field, Person};
pub use error::ScrapeError;
pub use specs::metadata::{extract, extract_html};
pub use specs::report::{Extraction, Issue, IssueKind, PageError};
