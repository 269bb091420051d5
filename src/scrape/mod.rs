// src/scrape/mod.rs
mod scrape;

pub use scrape::RunSummary;
pub use scrape::collect_entities;
pub use scrape::collect_registration;
pub use scrape::harvest_registration;
pub use scrape::collect_all_registrations;
pub use scrape::collect_disclosures;
