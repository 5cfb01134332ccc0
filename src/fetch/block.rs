// src/fetch/block.rs
// =============================================================================
// A ContentBlock is one paragraph of a wiki page.
//
// scraper's ElementRef borrows from the parsed document, so it cannot
// outlive it. We store the paragraph's outer HTML instead and re-parse it
// as a fragment whenever someone needs the element tree. Paragraphs are
// small, so re-parsing is cheap compared to the network fetch.
// =============================================================================

use scraper::{ElementRef, Html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    html: String,
}

impl ContentBlock {
    // Wraps a snippet of HTML, usually a single <p> element
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    // Captures an element from a parsed page
    pub fn from_element(element: ElementRef<'_>) -> Self {
        Self::new(element.html())
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    // Parses the block into its own element tree
    //
    // The fragment's root is a synthetic <html> element with the block's
    // elements below it.
    pub fn fragment(&self) -> Html {
        Html::parse_fragment(&self.html)
    }

    // Visible text of the block, tags stripped
    pub fn text(&self) -> String {
        self.fragment().root_element().text().collect()
    }
}
