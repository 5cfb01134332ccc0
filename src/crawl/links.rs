// src/crawl/links.rs
// =============================================================================
// This module finds internal wiki links in a page's paragraphs.
//
// How it works:
// 1. Walk every element of every paragraph, depth-first, in document order
// 2. Keep <a> elements whose href the LinkPolicy accepts
// 3. Let the same policy turn the href into an absolute URL
//
// Classification and normalization both live in LinkPolicy, so the crawl
// step never has to know which rule is in effect.
//
// Two policies:
// - Literal: any href containing "wiki/" is internal, and hrefs without
//   "https://en.wikipedia.org" get that string glued to the front. This is
//   plain string concatenation, so "https://example.com/wiki/C" becomes
//   "https://en.wikipedia.orghttps://example.com/wiki/C".
// - SameHost: resolve the href against the wiki with the url crate and keep
//   it only if it stays on en.wikipedia.org under /wiki/.
//
// Rust concepts:
// - Copy enums with methods: The policy is a value, not a trait object
// - Option chaining: `?` inside functions that return Option
// - Iterators: flat_map over blocks, filter_map over elements
// =============================================================================

use crate::fetch::ContentBlock;
use scraper::ElementRef;
use url::Url;

// Every internal link ends up under this prefix
pub const WIKI_BASE: &str = "https://en.wikipedia.org";

const WIKI_HOST: &str = "en.wikipedia.org";
const WIKI_MARKER: &str = "wiki/";

// Decides which anchors count as internal and how their hrefs are made absolute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkPolicy {
    /// Substring match on "wiki/" plus prefix concatenation
    #[default]
    Literal,
    /// Proper URL resolution, same host only
    SameHost,
}

impl LinkPolicy {
    // Returns the absolute URL to queue for this element, if it is an internal link
    pub fn internal_link(self, element: ElementRef<'_>) -> Option<String> {
        if element.value().name() != "a" {
            return None;
        }

        let href = element.value().attr("href")?;
        self.normalize(href)
    }

    // Classifies and normalizes a raw href
    //
    // Examples (Literal):
    //   "/wiki/B"                        -> Some("https://en.wikipedia.org/wiki/B")
    //   "https://en.wikipedia.org/wiki/B" -> Some("https://en.wikipedia.org/wiki/B")
    //   "/other"                         -> None
    pub fn normalize(self, href: &str) -> Option<String> {
        match self {
            LinkPolicy::Literal => normalize_literal(href),
            LinkPolicy::SameHost => normalize_same_host(href),
        }
    }
}

// Collects the internal links of a page, one entry per matching anchor
//
// Parameters:
//   blocks: the page's paragraphs, in order
//   policy: which links count and how they are absolutized
//
// Returns: absolute URLs in document order, duplicates kept
pub fn extract_internal_links(blocks: &[ContentBlock], policy: LinkPolicy) -> Vec<String> {
    blocks
        .iter()
        .flat_map(|block| block_links(block, policy))
        .collect()
}

fn block_links(block: &ContentBlock, policy: LinkPolicy) -> Vec<String> {
    let fragment = block.fragment();

    // descendants() is a pre-order walk that starts at the root itself
    let links = fragment
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter_map(|element| policy.internal_link(element))
        .collect();
    links
}

fn normalize_literal(href: &str) -> Option<String> {
    if !href.contains(WIKI_MARKER) {
        return None;
    }

    if href.contains(WIKI_BASE) {
        Some(href.to_string())
    } else {
        Some(format!("{}{}", WIKI_BASE, href))
    }
}

fn normalize_same_host(href: &str) -> Option<String> {
    let base = Url::parse(WIKI_BASE).ok()?;
    let mut url = base.join(href).ok()?;

    let on_wiki = matches!(url.scheme(), "http" | "https")
        && url.host_str() == Some(WIKI_HOST)
        && url.path().starts_with("/wiki/");
    if !on_wiki {
        return None;
    }

    // Section anchors point at the same page
    url.set_fragment(None);
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> Vec<ContentBlock> {
        vec![ContentBlock::new(html)]
    }

    #[test]
    fn test_relative_wiki_link_is_prefixed() {
        assert_eq!(
            LinkPolicy::Literal.normalize("/wiki/B"),
            Some("https://en.wikipedia.org/wiki/B".to_string())
        );
    }

    #[test]
    fn test_absolute_wiki_link_is_kept() {
        assert_eq!(
            LinkPolicy::Literal.normalize("https://en.wikipedia.org/wiki/B"),
            Some("https://en.wikipedia.org/wiki/B".to_string())
        );
    }

    #[test]
    fn test_foreign_wiki_link_is_concatenated() {
        assert_eq!(
            LinkPolicy::Literal.normalize("https://example.com/wiki/C"),
            Some("https://en.wikipedia.orghttps://example.com/wiki/C".to_string())
        );
    }

    #[test]
    fn test_non_wiki_link_is_ignored() {
        assert_eq!(LinkPolicy::Literal.normalize("/other"), None);
        assert_eq!(LinkPolicy::Literal.normalize("#cite_note-1"), None);
        assert_eq!(LinkPolicy::Literal.normalize(""), None);
    }

    #[test]
    fn test_same_host_drops_foreign_wiki_link() {
        assert_eq!(LinkPolicy::SameHost.normalize("https://example.com/wiki/C"), None);
    }

    #[test]
    fn test_same_host_resolves_relative_link() {
        assert_eq!(
            LinkPolicy::SameHost.normalize("/wiki/B#History"),
            Some("https://en.wikipedia.org/wiki/B".to_string())
        );
        assert_eq!(LinkPolicy::SameHost.normalize("/w/index.php?title=B"), None);
        assert_eq!(LinkPolicy::SameHost.normalize("mailto:someone@example.com"), None);
    }

    #[test]
    fn test_extract_only_anchor_elements() {
        let blocks = page(
            r#"<p><a href="/wiki/B">B</a> <a href="/other">other</a>
               <link href="/wiki/NotAnAnchor"> <area href="/wiki/Area"></p>"#,
        );
        assert_eq!(
            extract_internal_links(&blocks, LinkPolicy::Literal),
            vec!["https://en.wikipedia.org/wiki/B"]
        );
    }

    #[test]
    fn test_extract_nested_anchors_in_document_order() {
        let blocks = vec![
            ContentBlock::new(r#"<p><b><a href="/wiki/First">1</a></b> <i>x <a href="/wiki/Second">2</a></i></p>"#),
            ContentBlock::new(r#"<p><a href="/wiki/Third">3</a> <a href="/wiki/First">1 again</a></p>"#),
        ];
        assert_eq!(
            extract_internal_links(&blocks, LinkPolicy::Literal),
            vec![
                "https://en.wikipedia.org/wiki/First",
                "https://en.wikipedia.org/wiki/Second",
                "https://en.wikipedia.org/wiki/Third",
                "https://en.wikipedia.org/wiki/First",
            ]
        );
    }

    #[test]
    fn test_anchor_without_href() {
        let blocks = page(r#"<p><a name="top">no target</a></p>"#);
        assert!(extract_internal_links(&blocks, LinkPolicy::Literal).is_empty());
    }

    #[test]
    fn test_no_blocks_no_links() {
        assert!(extract_internal_links(&[], LinkPolicy::Literal).is_empty());
    }
}
