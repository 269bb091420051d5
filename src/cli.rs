// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::config::consts::{BASE_URL, DATA_DIR, DEBUG_LOG_FILE, REQUEST_PAUSE_MS};
use crate::config::options::{AppOptions, ScrapeOptions, StoreOptions};
use crate::core::net::Client;
use crate::core::sanitize::sanitize_id;
use crate::progress::Progress;
use crate::{logging, scrape, store};

#[derive(Debug, Parser)]
#[command(name = "ut_disclosures", version, about = "Harvest Utah campaign-finance disclosures and registrations")]
pub struct Cli {
    /// Directory for all output files
    #[arg(long, global = true, default_value = DATA_DIR)]
    pub data_dir: PathBuf,

    /// Portal root
    #[arg(long, global = true, env = "UT_DISCLOSURES_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Pause between entities, in milliseconds
    #[arg(long, global = true, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Debug logging (to .store/debug.log unless --log-file is given)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Append log lines to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get all entities and write them to ut_entities.csv
    GetEntities,
    /// Get one entity registration by id (one JSON file)
    GetRegistration { entity_id: String },
    /// Get every registration listed in ut_entities.csv, skipping existing files
    GetAllRegistrations {
        /// Re-fetch entities whose JSON file already exists
        #[arg(long)]
        refetch: bool,
    },
    /// Get disclosures by entity id and year (one CSV file)
    GetDisclosures { entity_id: String, year: String },
    /// Flatten all registration JSON files into ut_registrations.csv and ut_people.csv
    Consolidate,
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        let scrape = ScrapeOptions {
            pause: Duration::from_millis(self.pause_ms),
            ..ScrapeOptions::default()
        }
        .with_base_url(&self.base_url);

        let skip_existing = !matches!(self.command, Command::GetAllRegistrations { refetch: true });
        let store = StoreOptions { data_dir: self.data_dir.clone(), skip_existing };

        AppOptions { scrape, store }
    }

    fn init_logging(&self) -> std::io::Result<()> {
        let level = if self.debug { LevelFilter::Debug } else { LevelFilter::Info };
        let file = match (&self.log_file, self.debug) {
            (Some(p), _) => Some(p.clone()),
            (None, true) => Some(PathBuf::from(DEBUG_LOG_FILE)),
            (None, false) => None,
        };
        logging::init(level, file.as_deref())
    }
}

/// Progress lines on stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("{total} entities");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, id: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {id}", self.done, self.total);
    }
    fn item_failed(&mut self, id: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {id} FAILED: {reason}", self.done, self.total);
    }
}

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    cli.init_logging()?;
    let opts = cli.options();
    let client = Client::new(&opts.scrape);
    let mut progress = StderrProgress { total: 0, done: 0 };

    match &cli.command {
        Command::GetEntities => {
            let rows = scrape::collect_entities(&client, &opts.scrape, Some(&mut progress))?;
            let path = opts.store.entities_path();
            store::write_entity_list(&path, &rows)?;
            println!("wrote {} to {}", rows.len(), path.display());
        }
        Command::GetRegistration { entity_id } => {
            let path = scrape::harvest_registration(&client, &opts, entity_id)?;
            println!("wrote {}", path.display());
        }
        Command::GetAllRegistrations { .. } => {
            let listing = store::read_entity_list(&opts.store.entities_path())?;
            let ids: Vec<String> = listing.into_iter().map(|r| r.entity_id).collect();
            let summary = scrape::collect_all_registrations(&client, &opts, &ids, Some(&mut progress))?;
            println!(
                "wrote {}, skipped {}, failed {} ({} section issues)",
                summary.written.len(), summary.skipped, summary.failures.len(), summary.issues.len()
            );
            for f in &summary.failures {
                println!("  {} {}: {}", f.entity_id, f.url, f.reason);
            }
        }
        Command::GetDisclosures { entity_id, year } => {
            let rows = scrape::collect_disclosures(&client, &opts.scrape, entity_id, year)?;
            let path = opts.store.disclosures_path(&sanitize_id(entity_id), &sanitize_id(year));
            store::write_disclosures(&path, &rows)?;
            println!("wrote {} to {}", rows.len(), path.display());
        }
        Command::Consolidate => {
            let c = store::consolidate(&opts.store.data_dir)?;
            println!(
                "wrote {} entities to {} and {} people to {}",
                c.entities, c.registrations_csv.display(), c.people, c.people_csv.display()
            );
        }
    }
    Ok(())
}
