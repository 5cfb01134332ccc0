// src/lib.rs
// =============================================================================
// Library side of wiki-crawler.
//
// The binary in src/main.rs is a thin driver on top of these modules:
// - crawl: frontier, internal-link extraction and the crawl step
// - fetch: turning a URL into paragraphs, live or from fixtures
// - index: the word-count index pages are fed into
// =============================================================================

pub mod crawl;
pub mod fetch;
pub mod index;

pub use crawl::{CrawlMode, CrawlOutcome, Crawler, Frontier, LinkPolicy};
pub use fetch::{ContentBlock, FetchConfig, FetchError, Fetcher, WikiFetcher};
pub use index::{Index, MemoryIndex};
