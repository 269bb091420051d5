// src/specs/folder.rs
//! Scraping *spec* for the folder details page: it only embeds the
//! registration page in `iframe#registrationDialogIFrame`.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::core::html::{first_attr, selector};
use crate::error::ScrapeError;

static REGISTRATION_IFRAME: LazyLock<Selector> =
    LazyLock::new(|| selector("iframe#registrationDialogIFrame"));

/// Absolute URL of the registration metadata page embedded in a folder page.
pub fn metadata_url(html: &str, page_url: &str) -> Result<String, ScrapeError> {
    let doc = Html::parse_document(html);
    let src = first_attr(&doc, &REGISTRATION_IFRAME, "src")
        .ok_or_else(|| ScrapeError::MissingIframe { url: s!(page_url) })?;

    let base = Url::parse(page_url)
        .map_err(|source| ScrapeError::BadUrl { url: s!(page_url), source })?;
    let abs = base.join(&src)
        .map_err(|source| ScrapeError::BadUrl { url: src.clone(), source })?;
    Ok(abs.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOLDER: &str = "https://disclosures.utah.gov/Search/PublicSearch/FolderDetails/1409777";

    #[test]
    fn resolves_relative_iframe_src() {
        let html = r#"<div><iframe id="registrationDialogIFrame" src="/Registration/EntityDetails/1409777"></iframe></div>"#;
        assert_eq!(
            metadata_url(html, FOLDER).unwrap(),
            "https://disclosures.utah.gov/Registration/EntityDetails/1409777"
        );
    }

    #[test]
    fn keeps_absolute_iframe_src() {
        let html = r#"<iframe id="registrationDialogIFrame" src="https://other.example/R/1"></iframe>"#;
        assert_eq!(metadata_url(html, FOLDER).unwrap(), "https://other.example/R/1");
    }

    #[test]
    fn missing_iframe_is_an_error() {
        let html = r#"<iframe id="somethingElse" src="/x"></iframe>"#;
        let err = metadata_url(html, FOLDER).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingIframe { .. }));
        assert_eq!(err.url(), Some(FOLDER));
    }
}
