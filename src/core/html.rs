// src/core/html.rs
// Thin helpers over `scraper` for pulling display text out of a page.

use scraper::{ElementRef, Html, Selector};

/// All text under `el`, concatenated in document order.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of the first element matching `sel`, trimmed.
/// `None` when nothing matches.
pub fn first_text(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel).next().map(|el| text_of(el).trim().to_string())
}

/// Whether anything matches `sel`.
pub fn exists(doc: &Html, sel: &Selector) -> bool {
    doc.select(sel).next().is_some()
}

/// Trimmed text of the `n`th (0-based) `td` child of a row, or empty.
pub fn cell_text(row: ElementRef<'_>, cells: &Selector, n: usize) -> String {
    row.select(cells)
        .nth(n)
        .map(|td| text_of(td).trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_trims_and_joins_nested_text() {
        let doc = Html::parse_document(r#"<p id="x">  <b>$12</b>.34 </p><p id="x">no</p>"#);
        assert_eq!(first_text(&doc, selector!("#x")).as_deref(), Some("$12.34"));
        assert_eq!(first_text(&doc, selector!("#y")), None);
    }

    #[test]
    fn cell_text_out_of_range_is_empty() {
        let doc = Html::parse_document("<table><tr><td> a </td><td>b</td></tr></table>");
        let row = doc.select(selector!("tr")).next().unwrap();
        assert_eq!(cell_text(row, selector!("td"), 0), "a");
        assert_eq!(cell_text(row, selector!("td"), 4), "");
    }
}
