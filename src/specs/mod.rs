// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge of the disclosures portal: *where the ground truth
//! lives in the HTML* and *how to turn it into records*.
//!
//! ## What lives here
//! - **Registration metadata** (`metadata`): the detail page behind the
//!   "Statement of Organization" dialog. One `<h1>` names the entity type; each
//!   `<fieldset>` is a section with a `<legend>` and `div.dis-cell label`
//!   fields whose value is the text right after the label.
//! - **The vocabulary tables** the metadata extraction is driven by:
//!   `fields` (label → canonical field), `legend` (section title → target),
//!   `heading` (page heading → entity type). New regulator layouts are a table
//!   edit, not a control-flow edit.
//! - **Listing / folder / report parsing** (`entity_list`, `folder`,
//!   `disclosures`).
//!
//! ## What does **not** live here
//! - **Networking, pacing, pagination** – `scrape::`.
//! - **Persistence** – `store::`.
//!
//! ## Conventions & invariants
//! - Pure functions over already-fetched text or an already-parsed document.
//! - Never guess: an unknown label, legend or heading is reported, not mapped
//!   to the nearest match.
//! - One bad section never discards the page; one bad page never stops a run.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_registration → specs::folder::metadata_url
//!                                    → specs::metadata::extract
//!                     store::write_registration (outside of specs)
//! ```

pub mod page;
pub mod fields;
pub mod legend;
pub mod heading;
pub mod report;
pub mod builder;
pub mod metadata;
pub mod entity_list;
pub mod folder;
pub mod disclosures;
