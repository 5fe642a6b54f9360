use scraper::{Html, Node, Selector};

/// Elements whose text content is never rendered.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// A fetched page reduced to what the search needs: its text and the raw
/// hrefs of its anchors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub text: String,
    pub out_links: Vec<String>,
}

impl Page {
    /// The page used in place of one that could not be fetched.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        Self {
            text: extract_text(&document, "\n"),
            out_links: extract_hrefs(&document),
        }
    }
}

/// Raw `href` values of every anchor, in document order. Anchors without an
/// href are skipped.
pub fn extract_hrefs(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("a") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// All visible text nodes of the document joined with `separator`.
pub fn extract_text(document: &Html, separator: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node
            .ancestors()
            .filter_map(|ancestor| ancestor.value().as_element())
            .any(|element| HIDDEN_ELEMENTS.contains(&element.name()));
        if !hidden {
            parts.push(&**text);
        }
    }

    parts.join(separator)
}
