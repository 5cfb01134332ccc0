// src/index/mod.rs
// =============================================================================
// This module holds the full-text index the crawler feeds pages into.
//
// The crawler only needs to ask "have you seen this URL?" and to hand over
// a page's paragraphs. The word counts are for whoever drives the crawl.
//
// Submodules:
// - memory: MemoryIndex, a HashMap-backed implementation
// =============================================================================

mod memory;

use crate::fetch::ContentBlock;
use std::collections::HashMap;

pub use memory::MemoryIndex;

// What the crawler expects from an index
pub trait Index {
    /// True iff content for exactly this URL has been ingested before
    fn is_indexed(&self, url: &str) -> bool;

    /// Stores the page's word counts under `url`
    fn index_page(&mut self, url: &str, blocks: &[ContentBlock]);

    /// Occurrences of `word` per indexed URL that contains it
    fn get_counts(&self, word: &str) -> HashMap<String, u32>;
}

// Lets a crawler borrow an index the caller keeps using afterwards
impl<T: Index + ?Sized> Index for &mut T {
    fn is_indexed(&self, url: &str) -> bool {
        (**self).is_indexed(url)
    }

    fn index_page(&mut self, url: &str, blocks: &[ContentBlock]) {
        (**self).index_page(url, blocks)
    }

    fn get_counts(&self, word: &str) -> HashMap<String, u32> {
        (**self).get_counts(word)
    }
}
