// src/scrape/scrape.rs
use std::{collections::HashSet, path::PathBuf, thread};

use log::{error, info, warn};

use crate::{
    config::options::{AppOptions, ScrapeOptions},
    core::net::Fetch,
    core::sanitize::sanitize_id,
    data::{DisclosureRow, EntityListing, PageFailure},
    error::ScrapeError,
    progress::Progress,
    specs::{disclosures, entity_list, folder, metadata, page::HtmlDetailPage},
    specs::report::{EntityIssue, Extraction},
    store,
};

/// Outcome of a bulk registration run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub skipped: usize,
    /// Section-level issues of every written entity, in run order.
    pub issues: Vec<EntityIssue>,
    pub failures: Vec<PageFailure>,
}

/// Walk the advanced-search listing page by page.
///
/// The portal wraps around to the first page after the last one, so the walk
/// ends at the first entity id seen twice (or at an empty page). Pages that
/// error out are logged and skipped, up to `max_listing_errors` in a row.
pub fn collect_entities(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<EntityListing>, ScrapeError> {
    let url = opts.entity_list_url();
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<EntityListing> = Vec::new();
    let mut consecutive_errors = 0usize;
    let mut last_error: Option<ScrapeError> = None;

    for page in 1usize.. {
        let page_no = page.to_string();
        let body = match fetch.post_form(&url, &[("PageNumber", page_no.as_str())]) {
            Ok(body) => body,
            Err(e) => {
                warn!("listing page {page}: {e}");
                consecutive_errors += 1;
                last_error = Some(e.into());
                if consecutive_errors >= opts.max_listing_errors {
                    warn!("{consecutive_errors} listing pages failed in a row; stopping at page {page}");
                    break;
                }
                continue;
            }
        };
        consecutive_errors = 0;

        let rows = entity_list::parse_listing(&body);
        if rows.is_empty() {
            info!("listing page {page} is empty; done");
            break;
        }

        let mut wrapped = false;
        for row in rows {
            if !seen.insert(row.entity_id.clone()) {
                wrapped = true;
                break;
            }
            out.push(row);
        }

        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("listing page {page}: {} entities so far", out.len()));
        }
        if wrapped {
            info!("listing wrapped around at page {page}; done");
            break;
        }
    }

    match (out.is_empty(), last_error) {
        (true, Some(e)) => Err(e),
        _ => Ok(out),
    }
}

/// Folder details → embedded registration page → Entity.
pub fn collect_registration(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    entity_id: &str,
) -> Result<Extraction, ScrapeError> {
    let folder_url = opts.folder_details_url(entity_id);
    let folder_html = fetch.get_text(&folder_url)?;
    let meta_url = folder::metadata_url(&folder_html, &folder_url)?;

    let html = fetch.get_text(&meta_url)?;
    let page = HtmlDetailPage::parse(&html);
    let extraction = metadata::extract(&page, entity_id, &meta_url)?;

    if !extraction.is_clean() {
        warn!("{entity_id}: {} section issue(s) on {meta_url}", extraction.issues.len());
    }
    Ok(extraction)
}

/// Fetch one registration and write its JSON file; returns the path written.
pub fn harvest_registration(
    fetch: &dyn Fetch,
    app: &AppOptions,
    entity_id: &str,
) -> Result<PathBuf, ScrapeError> {
    let extraction = collect_registration(fetch, &app.scrape, entity_id)?;
    let path = app.store.registration_path(&sanitize_id(entity_id));
    store::write_registration(&path, &extraction.entity)?;
    Ok(path)
}

/// Harvest registrations one entity at a time, pausing after every fetch.
///
/// A page that cannot be extracted is recorded in the summary and the run
/// moves on. Only local I/O errors abort. `ut_failures.csv` and
/// `ut_issues.csv` are rewritten at the end of every run, header only when
/// the run had nothing to report.
pub fn collect_all_registrations(
    fetch: &dyn Fetch,
    app: &AppOptions,
    entity_ids: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let mut summary = RunSummary::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(entity_ids.len());
    }

    for id in entity_ids {
        let path = app.store.registration_path(&sanitize_id(id));
        if app.store.skip_existing && path.exists() {
            summary.skipped += 1;
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{} already exists", path.display()));
            }
            continue;
        }

        match collect_registration(fetch, &app.scrape, id) {
            Ok(extraction) => {
                store::write_registration(&path, &extraction.entity)?;
                summary.issues.extend(extraction.issues.into_iter().map(|issue| EntityIssue {
                    entity_id: id.clone(),
                    issue,
                }));
                summary.written.push(path);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id);
                }
            }
            Err(e) => {
                error!("{id}: {e}");
                let url = e.url()
                    .map(str::to_string)
                    .unwrap_or_else(|| app.scrape.folder_details_url(id));
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id, &e.to_string());
                }
                summary.failures.push(PageFailure {
                    entity_id: id.clone(),
                    url,
                    reason: e.to_string(),
                });
            }
        }

        thread::sleep(app.scrape.pause); // be polite
    }

    store::write_failures(&app.store.failures_path(), &summary.failures)?;
    store::write_issues(&app.store.issues_path(), &summary.issues)?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

/// Transactions of one entity for one report year. An entity that filed
/// nothing yields `Ok(vec![])`; a failed request is an error.
pub fn collect_disclosures(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    entity_id: &str,
    year: &str,
) -> Result<Vec<DisclosureRow>, ScrapeError> {
    let url = opts.report_url(entity_id, year);
    let body = fetch.get_text(&url)?;
    if disclosures::is_empty_report(&body) {
        info!("{entity_id}: no transactions in {year}");
    }
    disclosures::parse_report(&body).map_err(|source| ScrapeError::Report { url, source })
}
