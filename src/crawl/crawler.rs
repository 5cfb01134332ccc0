// src/crawl/crawler.rs
// =============================================================================
// The crawler: one crawl session anchored at one seed URL.
//
// Each call to crawl() is one step:
// 1. Pop the next URL off the frontier (nothing queued = no work)
// 2. Fetch its paragraphs through the injected Fetcher
// 3. Index the page if we are offline or the index has not seen it yet;
//    otherwise stop right here without looking at its links
// 4. Queue the page's internal links
// 5. Report the URL we just indexed
//
// Step 3 means an already indexed page is a dead end: it is fetched, but
// none of its links are queued.
//
// A failed fetch ends the step with the error. The URL has already been
// popped, so it is gone for good, and the index has not been touched.
//
// The crawler never loops on its own. Callers either call crawl() until
// they are happy, or drive it as a Stream of outcomes.
//
// Rust concepts:
// - Generics: The index and fetcher are type parameters, not globals
// - &mut self: Only one step can run at a time, checked by the compiler
// - Streams: futures::stream::unfold builds a lazy async sequence
// =============================================================================

use super::frontier::Frontier;
use super::links::{extract_internal_links, LinkPolicy};
use crate::fetch::{ContentBlock, CrawlMode, FetchError, Fetcher};
use crate::index::Index;
use futures::stream::{self, Stream};
use serde::Serialize;
use tracing::{debug, info};

// What a single crawl step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "url", rename_all = "snake_case")]
pub enum CrawlOutcome {
    /// The page was indexed and its links were queued
    Indexed(String),
    /// The page was already indexed; nothing else happened
    Skipped,
}

impl CrawlOutcome {
    // The indexed URL, if this step did any work
    pub fn into_url(self) -> Option<String> {
        match self {
            CrawlOutcome::Indexed(url) => Some(url),
            CrawlOutcome::Skipped => None,
        }
    }
}

pub struct Crawler<I, F> {
    source: String,
    index: I,
    frontier: Frontier,
    fetcher: F,
    policy: LinkPolicy,
}

impl<I: Index, F: Fetcher> Crawler<I, F> {
    // Starts a session with only the seed URL queued
    pub fn new(source: impl Into<String>, index: I, fetcher: F) -> Self {
        let source = source.into();
        let mut frontier = Frontier::new();
        frontier.push(source.clone());

        Self {
            source,
            index,
            frontier,
            fetcher,
            policy: LinkPolicy::default(),
        }
    }

    // Swaps the rule used to pick and absolutize internal links
    pub fn with_policy(mut self, policy: LinkPolicy) -> Self {
        self.policy = policy;
        self
    }

    // The seed this session started from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn queue_size(&self) -> usize {
        self.frontier.len()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn policy(&self) -> LinkPolicy {
        self.policy
    }

    // Gives the index back once the session is over
    pub fn into_index(self) -> I {
        self.index
    }

    // Runs one crawl step
    //
    // Returns:
    //   Ok(Some(url)) = url was indexed and its links queued
    //   Ok(None)      = frontier empty, or the page was already indexed
    //   Err(e)        = the fetch failed; the URL is dropped
    pub async fn crawl(&mut self, mode: CrawlMode) -> Result<Option<String>, FetchError> {
        Ok(self.step(mode).await?.and_then(CrawlOutcome::into_url))
    }

    // Same as crawl(), but tells "frontier empty" (None) apart from "skipped"
    pub async fn step(&mut self, mode: CrawlMode) -> Result<Option<CrawlOutcome>, FetchError> {
        let Some(url) = self.frontier.pop() else {
            return Ok(None);
        };

        info!(%url, ?mode, "checking URL");

        let blocks = self.fetcher.fetch(&url, mode).await?;

        if mode == CrawlMode::Offline || !self.index.is_indexed(&url) {
            self.index.index_page(&url, &blocks);
        } else {
            debug!(%url, "already indexed, not following its links");
            return Ok(Some(CrawlOutcome::Skipped));
        }

        let queued = self.queue_links(&blocks);
        debug!(%url, queued, queue_size = self.frontier.len(), "queued internal links");

        Ok(Some(CrawlOutcome::Indexed(url)))
    }

    // Pushes every internal link found in `blocks` onto the frontier
    //
    // Returns: how many URLs were queued
    pub fn queue_links(&mut self, blocks: &[ContentBlock]) -> usize {
        let links = extract_internal_links(blocks, self.policy);
        let count = links.len();
        self.frontier.extend(links);
        count
    }

    // Calls crawl() until a page gets indexed or the frontier runs dry
    pub async fn crawl_until_indexed(
        &mut self,
        mode: CrawlMode,
    ) -> Result<Option<String>, FetchError> {
        while let Some(outcome) = self.step(mode).await? {
            if let CrawlOutcome::Indexed(url) = outcome {
                return Ok(Some(url));
            }
        }
        Ok(None)
    }

    // Drives the crawler as a lazy sequence of step outcomes
    //
    // The stream ends when the frontier is empty. A fetch error is yielded
    // once and then the stream ends too; the crawler itself stays usable and
    // a fresh stream picks up with the next queued URL.
    pub fn stream(
        &mut self,
        mode: CrawlMode,
    ) -> impl Stream<Item = Result<CrawlOutcome, FetchError>> + '_ {
        stream::unfold(Some(self), move |state| async move {
            let Some(crawler) = state else {
                return None;
            };
            match crawler.step(mode).await {
                Ok(Some(outcome)) => Some((Ok(outcome), Some(crawler))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}
