// src/core/html.rs
//
// Thin helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Parse a CSS selector literal. Selectors in this crate are compile-time
/// constants, so a parse failure is a programming error.
pub fn selector(css: &'static str) -> Selector {
    match Selector::parse(css) {
        Ok(sel) => sel,
        Err(e) => panic!("invalid selector literal {css:?}: {e}"),
    }
}

/// Whitespace-normalized text content of an element.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// The text directly after `el`, up to the next element (lxml's `tail`), trimmed.
///
/// `<label>City</label> Salt Lake City <br>` → `"Salt Lake City"`.
pub fn tail_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in el.next_siblings() {
        match node.value().as_text() {
            Some(text) => out.push_str(text),
            None => break,
        }
    }
    out.trim().to_string()
}

/// First element matching `sel`, if any.
pub fn first<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

/// Attribute value of the first element matching `sel`.
pub fn first_attr(doc: &Html, sel: &Selector, attr: &str) -> Option<String> {
    first(doc, sel)
        .and_then(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_text_stops_at_next_element() {
        let doc = Html::parse_fragment(
            r#"<div class="dis-cell"><label>City</label>
                 Salt Lake City
               <br><span>ignored</span></div>"#,
        );
        let label = first(&doc, &selector("label")).unwrap();
        assert_eq!(tail_text(label), "Salt Lake City");
    }

    #[test]
    fn tail_text_empty_when_nothing_follows() {
        let doc = Html::parse_fragment(r#"<div><label>Suffix</label></div>"#);
        let label = first(&doc, &selector("label")).unwrap();
        assert_eq!(tail_text(label), "");
    }

    #[test]
    fn text_of_normalizes_nested_text() {
        let doc = Html::parse_fragment("<h1>  Financial Disclosures\n <b>Registration</b> for Corporation </h1>");
        let h1 = first(&doc, &selector("h1")).unwrap();
        assert_eq!(text_of(h1), "Financial Disclosures Registration for Corporation");
    }

    #[test]
    fn first_attr_skips_blank() {
        let doc = Html::parse_document(r#"<iframe id="a" src="  "></iframe><iframe id="b" src="/x"></iframe>"#);
        assert_eq!(first_attr(&doc, &selector("iframe#a"), "src"), None);
        assert_eq!(first_attr(&doc, &selector("iframe#b"), "src").as_deref(), Some("/x"));
    }
}
