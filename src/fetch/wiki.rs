// src/fetch/wiki.rs
// =============================================================================
// This module fetches wiki pages and splits them into paragraphs.
//
// Two sources:
// - Live: an HTTP GET against the real site using reqwest
// - Offline: a stored copy of the page under a fixtures directory, laid out
//   as <fixtures>/<host>/<path>, e.g.
//   fixtures/en.wikipedia.org/wiki/Java_(programming_language)
//
// Either way the HTML goes through the same parser, so a broken page fails
// with the same FetchError::Parse in both modes.
//
// Rust concepts:
// - Builder pattern: reqwest::Client::builder() for client settings
// - map_err: Turning library errors into our own error type
// - Path/PathBuf: Platform-aware filesystem paths
// =============================================================================

use super::{ContentBlock, CrawlMode, FetchError, Fetcher};
use reqwest::Client;
use scraper::{Html, Selector};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

// The element that wraps the article body on every wiki page
const CONTENT_ROOT: &str = "#mw-content-text";

// Settings for WikiFetcher
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-request timeout for live fetches
    pub timeout: Duration,
    /// Where offline mode looks for stored pages
    pub fixtures_dir: PathBuf,
    /// User-Agent header sent with live requests
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            fixtures_dir: PathBuf::from("fixtures"),
            user_agent: concat!("wiki-crawler/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// Fetches wiki pages live or from fixtures
pub struct WikiFetcher {
    client: Client,
    fixtures_dir: PathBuf,
}

impl WikiFetcher {
    // Creates a fetcher from the given settings
    //
    // Fails only if the TLS backend cannot be initialized.
    pub fn new(config: FetchConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            client,
            fixtures_dir: config.fixtures_dir,
        })
    }

    // Downloads a page and returns its paragraphs
    pub async fn fetch_live(&self, url: &str) -> Result<Vec<ContentBlock>, FetchError> {
        let network = |source: reqwest::Error| FetchError::Network {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(network)?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let html = response.text().await.map_err(network)?;
        parse_paragraphs(url, &html)
    }

    // Reads the stored copy of a page and returns its paragraphs
    pub async fn read_offline(&self, url: &str) -> Result<Vec<ContentBlock>, FetchError> {
        let path = fixture_path(&self.fixtures_dir, url)?;
        debug!(url, path = %path.display(), "reading fixture");

        let html = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| FetchError::Io { path, source })?;

        parse_paragraphs(url, &html)
    }
}

impl Fetcher for WikiFetcher {
    async fn fetch(&self, url: &str, mode: CrawlMode) -> Result<Vec<ContentBlock>, FetchError> {
        match mode {
            CrawlMode::Live => self.fetch_live(url).await,
            CrawlMode::Offline => self.read_offline(url).await,
        }
    }
}

// Pulls the paragraphs out of a wiki page
//
// Parameters:
//   url: the page URL, only used for error messages
//   html: the full page HTML
//
// Returns: one ContentBlock per <p> inside #mw-content-text, in document order
//
// Paragraphs outside the article body (navigation, footers) are ignored.
pub fn parse_paragraphs(url: &str, html: &str) -> Result<Vec<ContentBlock>, FetchError> {
    let parse_error = |reason: String| FetchError::Parse {
        url: url.to_string(),
        reason,
    };

    let root_selector = Selector::parse(CONTENT_ROOT).map_err(|e| parse_error(format!("{:?}", e)))?;
    let paragraph_selector = Selector::parse("p").map_err(|e| parse_error(format!("{:?}", e)))?;

    let document = Html::parse_document(html);

    let content = document
        .select(&root_selector)
        .next()
        .ok_or_else(|| parse_error(format!("missing {}", CONTENT_ROOT)))?;

    let blocks = content
        .select(&paragraph_selector)
        .map(ContentBlock::from_element)
        .collect();

    Ok(blocks)
}

// Maps a page URL onto its file under the fixtures directory
//
// Example:
//   "https://en.wikipedia.org/wiki/Java" -> <dir>/en.wikipedia.org/wiki/Java
fn fixture_path(dir: &Path, url: &str) -> Result<PathBuf, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| invalid("URL has no host".to_string()))?;

    let relative = parsed.path().trim_start_matches('/');
    if relative.is_empty() || relative.split('/').any(|segment| segment == "..") {
        return Err(invalid("URL does not name a page".to_string()));
    }

    Ok(dir.join(host).join(relative))
}
