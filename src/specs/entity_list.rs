// src/specs/entity_list.rs
//! Scraping *spec* for the advanced-search entity listing.
//!
//! The listing is a POST to `GetEntityReportList` with a `PageNumber`; the
//! response is a table whose `tbody tr` rows look like
//! `<td><a href=".../FolderDetails/1409777">Acme PAC</a></td><td>PAC</td>…`.
//! Pagination lives in `scrape::collect_entities`.

use std::sync::LazyLock;

use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::core::html::{selector, text_of};
use crate::core::sanitize::last_segment;
use crate::data::EntityListing;

static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tbody tr"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));

pub fn parse_listing(html: &str) -> Vec<EntityListing> {
    let doc = Html::parse_document(html);
    doc.select(&ROW).filter_map(parse_row).collect()
}

fn parse_row(row: ElementRef<'_>) -> Option<EntityListing> {
    let mut cells = row.children().filter_map(ElementRef::wrap);
    let (Some(link_cell), Some(type_cell)) = (cells.next(), cells.next()) else {
        debug!("listing row with fewer than two cells skipped");
        return None;
    };

    let link = link_cell.select(&LINK).next()?;
    let href = link.value().attr("href")?;
    let Some(entity_id) = last_segment(href) else {
        debug!("listing link without id: {href:?}");
        return None;
    };

    Some(EntityListing {
        entity_id: s!(entity_id),
        entity_type: text_of(type_cell),
        name: text_of(link),
    })
}
