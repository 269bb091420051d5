// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://disclosures.utah.gov";
pub const USER_AGENT: &str = concat!("ut_disclosures/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// Portal paths (relative to BASE_URL)
pub const ENTITY_LIST_PATH: &str = "/Search/AdvancedSearch/GetEntityReportList";
pub const FOLDER_DETAILS_PATH: &str = "/Search/PublicSearch/FolderDetails/";
pub const REPORT_PATH: &str = "/Search/AdvancedSearch/GenerateReport/";

// The report endpoint answers with this exact body instead of an empty CSV.
pub const EMPTY_REPORT_MSG: &str = "There are no recorded transactions for this entity in this year.";

// Local data
pub const DATA_DIR: &str = "data";
pub const ENTITIES_FILE: &str = "ut_entities.csv";
pub const REGISTRATION_PREFIX: &str = "ut_registration_";
pub const DISCLOSURES_PREFIX: &str = "ut_disclosures_";
pub const REGISTRATIONS_CSV: &str = "ut_registrations.csv";
pub const PEOPLE_CSV: &str = "ut_people.csv";
pub const FAILURES_CSV: &str = "ut_failures.csv";
pub const ISSUES_CSV: &str = "ut_issues.csv";

// Logging
pub const DEBUG_LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV: &str = "UT_DISCLOSURES_LOG";

// Pacing
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite
pub const MAX_LISTING_ERRORS: usize = 5; // consecutive listing pages that may fail
