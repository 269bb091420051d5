// src/specs/metadata.rs
//! Scraping *spec* for a registration detail page ("Statement of Organization").
//!
//! Purpose:
//! - Turn one already-parsed detail page into one `Entity` with its `Person`s.
//! - Resolve the entity type from the `<h1>` before touching any section.
//! - Walk the `<fieldset>` sections in document order; map labels through
//!   `fields`, route the section through `legend`, build through `builder`.
//!
//! Failure policy:
//! - Missing or unknown heading → `PageError`, no Entity.
//! - Unmapped label, missing/unknown legend, misrouted or overwritten field →
//!   `Issue` on the `Extraction`, the rest of the page still counts.
//!
//! Non-Responsibilities (by design):
//! - **No networking, no persistence.** See `scrape::collect_registration`.

use log::debug;

use crate::data::Entity;
use super::builder::{EntityBuilder, SectionFields};
use super::fields;
use super::heading;
use super::legend::{self, Legend, LegendTable};
use super::page::{DetailPage, HtmlDetailPage, RawSection};
use super::report::{Extraction, Issue, PageError};

/// Extract with the current legend vocabulary.
pub fn extract<P: DetailPage + ?Sized>(
    page: &P,
    entity_id: &str,
    url: &str,
) -> Result<Extraction, PageError> {
    extract_with(page, entity_id, url, &legend::CURRENT)
}

/// Convenience for raw HTML.
pub fn extract_html(html: &str, entity_id: &str, url: &str) -> Result<Extraction, PageError> {
    extract(&HtmlDetailPage::parse(html), entity_id, url)
}

pub fn extract_with<P: DetailPage + ?Sized>(
    page: &P,
    entity_id: &str,
    url: &str,
    legends: &LegendTable,
) -> Result<Extraction, PageError> {
    let heading = page.heading()
        .ok_or_else(|| PageError::MissingHeading { url: s!(url) })?;
    let entity_type = heading::resolve_type(&heading, url)?;

    let mut builder = EntityBuilder::new(Entity::new(entity_id, url, entity_type));

    for (ix, section) in page.sections().into_iter().enumerate() {
        let mapped = map_section(ix, &section, &mut builder);

        let Some(title) = section.legend.as_deref() else {
            builder.report(Issue::MissingLegend { section: ix });
            continue;
        };

        let target = legends.classify(title);
        debug!("{entity_id}: section {ix} {title:?} → {target:?} ({} fields)", mapped.len());

        match target {
            Legend::EntityLevel => builder.apply_entity_section(ix, title, mapped),
            Legend::PersonLevel => builder.push_person_section(ix, title, mapped),
            Legend::Unknown => builder.report(Issue::UnknownLegend {
                section: ix,
                legend: s!(title),
                content: section.fields.clone(),
            }),
        }
    }

    Ok(builder.finish())
}

/// Map every label of a section; unmapped labels are reported and skipped.
fn map_section(ix: usize, section: &RawSection, builder: &mut EntityBuilder) -> SectionFields {
    let mut out = Vec::with_capacity(section.fields.len());
    for lv in &section.fields {
        match fields::resolve(&lv.label) {
            Some(field) => out.push((field, lv.value.clone())),
            None => builder.report(Issue::UnmappedLabel {
                section: ix,
                label: lv.label.clone(),
                value: lv.value.clone(),
            }),
        }
    }
    out
}
