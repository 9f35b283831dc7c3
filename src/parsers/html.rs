use crate::parsers::{ParsedPage, RawAnchor, RawImage};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static selector"));
static META: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("static selector"));
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("static selector"));
static IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("static selector"));

/// Parses HTML content into metadata, anchors and images in document order
pub fn parse(html: &str) -> ParsedPage {
    let doc = Html::parse_document(html);

    let anchors = doc
        .select(&ANCHOR)
        .map(|e| RawAnchor {
            href: e.value().attr("href").map(str::to_string),
            rel: e.value().attr("rel").map(str::to_string),
            text: element_text(&e),
        })
        .collect::<Vec<_>>();

    let images = doc
        .select(&IMAGE)
        .map(|e| RawImage {
            src: e.value().attr("src").map(str::to_string),
            alt: e.value().attr("alt").map(str::to_string),
        })
        .collect::<Vec<_>>();

    ::log::debug!(
        "HTML parser found {} anchors and {} images",
        anchors.len(),
        images.len()
    );

    ParsedPage {
        title: extract_title(&doc),
        description: extract_description(&doc),
        anchors,
        images,
    }
}

/// Text of the first `<title>`, trimmed; `None` when absent or blank
fn extract_title(doc: &Html) -> Option<String> {
    doc.select(&TITLE)
        .next()
        .map(|e| element_text(&e))
        .filter(|t| !t.is_empty())
}

/// Meta description, preferring `name="description"` over `og:description`
fn extract_description(doc: &Html) -> Option<String> {
    meta_content(doc, "name", "description")
        .or_else(|| meta_content(doc, "property", "og:description"))
}

fn meta_content(doc: &Html, key: &str, value: &str) -> Option<String> {
    doc.select(&META)
        .filter(|e| {
            e.value()
                .attr(key)
                .is_some_and(|v| v.trim().eq_ignore_ascii_case(value))
        })
        .filter_map(|e| e.value().attr("content"))
        .map(str::trim)
        .find(|c| !c.is_empty())
        .map(str::to_string)
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
