// src/specs/page.rs
//! The document seam of the metadata extraction.
//!
//! `metadata::extract` only needs a heading and an ordered list of sections
//! with raw label/value pairs; `HtmlDetailPage` produces them from the
//! portal's markup, `StaticPage` from values already in memory.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::core::html::{selector, tail_text, text_of};

static H1: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static FIELDSET: LazyLock<Selector> = LazyLock::new(|| selector("fieldset"));
static LEGEND: LazyLock<Selector> = LazyLock::new(|| selector("legend"));
static CELL_LABEL: LazyLock<Selector> = LazyLock::new(|| selector("div.dis-cell label"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

impl LabeledValue {
    pub fn new(label: &str, value: &str) -> Self {
        Self { label: s!(label), value: s!(value) }
    }
}

/// One `<fieldset>` as found on the page, nothing mapped yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawSection {
    pub legend: Option<String>,
    pub fields: Vec<LabeledValue>,
}

pub trait DetailPage {
    /// Page heading (`<h1>`), whitespace-normalized.
    fn heading(&self) -> Option<String>;

    /// Sections in document order.
    fn sections(&self) -> Vec<RawSection>;
}

/// A registration detail page parsed with `scraper`.
pub struct HtmlDetailPage {
    doc: Html,
}

impl HtmlDetailPage {
    pub fn parse(html: &str) -> Self {
        Self::from_document(Html::parse_document(html))
    }

    /// Wrap a document the caller already parsed.
    pub fn from_document(doc: Html) -> Self {
        Self { doc }
    }
}

impl DetailPage for HtmlDetailPage {
    fn heading(&self) -> Option<String> {
        self.doc.select(&H1).next()
            .map(text_of)
            .filter(|h| !h.is_empty())
    }

    fn sections(&self) -> Vec<RawSection> {
        self.doc.select(&FIELDSET).map(read_fieldset).collect()
    }
}

fn read_fieldset(fieldset: ElementRef<'_>) -> RawSection {
    let legend = fieldset.select(&LEGEND).next()
        .map(text_of)
        .filter(|l| !l.is_empty());

    let fields = fieldset.select(&CELL_LABEL)
        .map(|label| LabeledValue { label: text_of(label), value: tail_text(label) })
        .collect();

    RawSection { legend, fields }
}

/// Pre-parsed page contents, for callers with their own DOM layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticPage {
    pub heading: Option<String>,
    pub sections: Vec<RawSection>,
}

impl StaticPage {
    pub fn new(heading: &str) -> Self {
        Self { heading: Some(s!(heading)), sections: Vec::new() }
    }

    pub fn section(mut self, legend: &str, fields: &[(&str, &str)]) -> Self {
        self.sections.push(RawSection {
            legend: Some(s!(legend)),
            fields: fields.iter().map(|(l, v)| LabeledValue::new(l, v)).collect(),
        });
        self
    }
}

impl DetailPage for StaticPage {
    fn heading(&self) -> Option<String> {
        self.heading.clone()
    }

    fn sections(&self) -> Vec<RawSection> {
        self.sections.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <h1>Political Action Committee Statement of Organization</h1>
          <fieldset>
            <legend> PAC Information </legend>
            <div class="dis-row">
              <div class="dis-cell"><label>Name</label> Acme PAC </div>
              <div class="dis-cell"><label>Telephone Number</label>801-555-0100</div>
            </div>
          </fieldset>
          <fieldset>
            <div class="dis-cell"><label>Zip</label>84111</div>
          </fieldset>
          <p><label>Outside</label> not a field</p>
        </body></html>
    "#;

    #[test]
    fn reads_heading_and_sections_in_order() {
        let page = HtmlDetailPage::parse(PAGE);
        assert_eq!(page.heading().as_deref(), Some("Political Action Committee Statement of Organization"));

        let sections = page.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].legend.as_deref(), Some("PAC Information"));
        assert_eq!(sections[0].fields, vec![
            LabeledValue::new("Name", "Acme PAC"),
            LabeledValue::new("Telephone Number", "801-555-0100"),
        ]);
        assert_eq!(sections[1].legend, None);
        assert_eq!(sections[1].fields, vec![LabeledValue::new("Zip", "84111")]);
    }

    #[test]
    fn missing_heading_is_none() {
        let page = HtmlDetailPage::parse("<html><body><fieldset></fieldset></body></html>");
        assert_eq!(page.heading(), None);
        assert_eq!(page.sections().len(), 1);
    }

    #[test]
    fn wraps_an_already_parsed_document() {
        let doc = Html::parse_document(PAGE);
        let page = HtmlDetailPage::from_document(doc);
        assert_eq!(page.sections(), HtmlDetailPage::parse(PAGE).sections());
    }
}
