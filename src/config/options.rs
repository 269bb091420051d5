// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub store: StoreOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            store: StoreOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Portal root, no trailing slash.
    pub base_url: String,
    /// Sleep after every entity whose detail pages were fetched.
    pub pause: Duration,
    pub timeout: Duration,
    /// Stop the listing walk after this many failed pages in a row.
    pub max_listing_errors: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            max_listing_errors: MAX_LISTING_ERRORS,
        }
    }
}

impl ScrapeOptions {
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn entity_list_url(&self) -> String {
        join!(&self.base_url, ENTITY_LIST_PATH)
    }

    pub fn folder_details_url(&self, entity_id: &str) -> String {
        join!(&self.base_url, FOLDER_DETAILS_PATH, entity_id)
    }

    pub fn report_url(&self, entity_id: &str, year: &str) -> String {
        format!("{}{}{}?ReportYear={}", self.base_url, REPORT_PATH, entity_id, year)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub data_dir: PathBuf,
    /// `get-all-registrations` leaves existing JSON files alone.
    pub skip_existing: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            skip_existing: true,
        }
    }
}

impl StoreOptions {
    pub fn entities_path(&self) -> PathBuf {
        self.data_dir.join(ENTITIES_FILE)
    }

    pub fn registration_path(&self, entity_id: &str) -> PathBuf {
        self.data_dir.join(join!(REGISTRATION_PREFIX, entity_id, ".json"))
    }

    pub fn disclosures_path(&self, entity_id: &str, year: &str) -> PathBuf {
        self.data_dir.join(join!(DISCLOSURES_PREFIX, entity_id, "_", year, ".csv"))
    }

    pub fn failures_path(&self) -> PathBuf {
        self.data_dir.join(FAILURES_CSV)
    }

    pub fn issues_path(&self) -> PathBuf {
        self.data_dir.join(ISSUES_CSV)
    }
}
