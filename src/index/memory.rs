// src/index/memory.rs
// =============================================================================
// An in-memory index: URL -> (word -> number of occurrences).
//
// How words are counted:
// 1. Take the visible text of every paragraph
// 2. Replace punctuation and symbols with spaces
// 3. Lowercase everything
// 4. Split on whitespace and count each word
//
// Indexing a URL a second time replaces its old counts rather than adding
// to them, so the counts always describe the latest copy of the page.
//
// Rust concepts:
// - HashMap::entry: Insert-or-update in a single lookup
// - char methods: Unicode-aware character classification
// =============================================================================

use super::Index;
use crate::fetch::ContentBlock;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct MemoryIndex {
    pages: HashMap<String, HashMap<String, u32>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // Number of indexed pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    // Indexed URLs, sorted so output is stable
    pub fn urls(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        urls.sort_unstable();
        urls
    }

    // Occurrences of one word on one page (0 if either is unknown)
    pub fn get_count(&self, url: &str, word: &str) -> u32 {
        self.pages
            .get(url)
            .and_then(|terms| terms.get(&word.to_lowercase()))
            .copied()
            .unwrap_or(0)
    }
}

impl Index for MemoryIndex {
    fn is_indexed(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    fn index_page(&mut self, url: &str, blocks: &[ContentBlock]) {
        let mut terms: HashMap<String, u32> = HashMap::new();

        for block in blocks {
            for word in split_words(&block.text()) {
                *terms.entry(word).or_insert(0) += 1;
            }
        }

        debug!(url, distinct_terms = terms.len(), "indexed page");
        self.pages.insert(url.to_string(), terms);
    }

    fn get_counts(&self, word: &str) -> HashMap<String, u32> {
        let word = word.to_lowercase();

        self.pages
            .iter()
            .filter_map(|(url, terms)| terms.get(&word).map(|count| (url.clone(), *count)))
            .collect()
    }
}

// Splits text into lowercase words, dropping punctuation
fn split_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(paragraphs: &[&str]) -> Vec<ContentBlock> {
        paragraphs
            .iter()
            .map(|p| ContentBlock::new(format!("<p>{}</p>", p)))
            .collect()
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words("The JVM's job: run <bytecode>, fast!"),
            vec!["the", "jvm", "s", "job", "run", "bytecode", "fast"]
        );
    }

    #[test]
    fn test_index_page_counts_words() {
        let mut index = MemoryIndex::new();
        index.index_page(
            "https://en.wikipedia.org/wiki/A",
            &blocks(&["The cat and the hat.", "<a href=\"/wiki/The\">The</a> end"]),
        );

        assert!(index.is_indexed("https://en.wikipedia.org/wiki/A"));
        assert_eq!(index.get_count("https://en.wikipedia.org/wiki/A", "the"), 3);
        assert_eq!(index.get_count("https://en.wikipedia.org/wiki/A", "THE"), 3);
        assert_eq!(index.get_count("https://en.wikipedia.org/wiki/A", "dog"), 0);
    }

    #[test]
    fn test_get_counts_only_lists_pages_with_word() {
        let mut index = MemoryIndex::new();
        index.index_page("A", &blocks(&["the the the"]));
        index.index_page("B", &blocks(&["no articles here"]));
        index.index_page("C", &blocks(&["the end"]));

        let counts = index.get_counts("the");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["A"], 3);
        assert_eq!(counts["C"], 1);
        assert!(!counts.contains_key("B"));
    }

    #[test]
    fn test_reindex_replaces_counts() {
        let mut index = MemoryIndex::new();
        index.index_page("A", &blocks(&["the the"]));
        index.index_page("A", &blocks(&["the"]));

        assert_eq!(index.len(), 1);
        assert_eq!(index.get_count("A", "the"), 1);
    }

    #[test]
    fn test_unknown_url_not_indexed() {
        let index = MemoryIndex::new();
        assert!(!index.is_indexed("https://en.wikipedia.org/wiki/A"));
        assert!(index.get_counts("the").is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_urls_sorted() {
        let mut index = MemoryIndex::new();
        index.index_page("b", &blocks(&["x"]));
        index.index_page("a", &blocks(&["y"]));
        assert_eq!(index.urls(), vec!["a", "b"]);
    }

    #[test]
    fn test_blanket_impl_for_mut_ref() {
        let mut index = MemoryIndex::new();
        {
            let mut borrowed = &mut index;
            Index::index_page(&mut borrowed, "A", &blocks(&["hello"]));
        }
        assert!(index.is_indexed("A"));
    }
}
