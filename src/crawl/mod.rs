// src/crawl/mod.rs
// =============================================================================
// This module handles the breadth-first wiki crawl.
//
// Submodules:
// - frontier: the FIFO queue of URLs still to visit
// - links: picks internal wiki links out of a page and makes them absolute
// - crawler: the crawl step that ties the frontier, fetcher and index together
//
// Features:
// - Breadth-first order from a single seed page
// - Pages the index already knows are not followed in live mode
// - Swappable link policy (literal "wiki/" matching or same-host resolution)
// =============================================================================

mod crawler;
mod frontier;
mod links;

// Re-export the crawl API so callers can write `crawl::Crawler`
pub use crate::fetch::CrawlMode;
pub use crawler::{CrawlOutcome, Crawler};
pub use frontier::Frontier;
pub use links::{extract_internal_links, LinkPolicy, WIKI_BASE};
