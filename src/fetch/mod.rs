// src/fetch/mod.rs
// =============================================================================
// This module turns a URL into the paragraphs of a wiki page.
//
// Submodules:
// - block: ContentBlock, one paragraph of a page
// - error: FetchError, the only error the crawler ever sees
// - wiki: WikiFetcher, reads pages over HTTP or from fixture files
//
// The crawler never talks to reqwest or the filesystem directly. It only
// knows the Fetcher trait below, so tests can hand it a scripted fetcher.
//
// Rust concepts:
// - Traits: A shared interface that several types can implement
// - async fn in traits: The fetch call awaits network or disk I/O
// - Copy enums: Small values that are cheap to pass around by value
// =============================================================================

mod block;
mod error;
mod wiki;

use serde::Serialize;

pub use block::ContentBlock;
pub use error::FetchError;
pub use wiki::{parse_paragraphs, FetchConfig, WikiFetcher};

// Selects where page content comes from
//
// Live reads the real site, Offline reads stored copies of pages so
// runs are repeatable. The crawl step also uses the mode to decide
// whether an already indexed page gets indexed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlMode {
    Live,
    Offline,
}

// Anything that can produce the content blocks of a page
//
// Implementations must fail with the same error kind in both modes when
// the markup cannot be parsed.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str, mode: CrawlMode) -> Result<Vec<ContentBlock>, FetchError>;
}
