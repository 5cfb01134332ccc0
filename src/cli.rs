// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - crawl: start at a seed page, crawl breadth-first, print word counts
// - links: fetch one page and show which links the crawler would queue
//
// Both share the same "where do pages come from" flags, which live in
// SourceArgs and get flattened into each subcommand.
//
// Rust concepts:
// - Derive macros: Parser, Subcommand and Args generate the parsing code
// - #[command(flatten)]: Reuse one group of flags in several subcommands
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use wiki_crawler::crawl::{CrawlMode, LinkPolicy};
use wiki_crawler::fetch::FetchConfig;

// Where a crawl starts when no seed is given
pub const DEFAULT_SEED: &str = "https://en.wikipedia.org/wiki/Java_(programming_language)";

#[derive(Parser, Debug)]
#[command(
    name = "wiki-crawler",
    version,
    about = "Crawl a wiki breadth-first and count words on the pages it finds",
    long_about = "wiki-crawler starts from a seed page, follows internal wiki links in \
                  breadth-first order and feeds every new page into a word-count index. \
                  Use --offline to crawl stored copies of pages instead of the live site."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl from a seed page and print how often a word appears per page
    ///
    /// Example: wiki-crawler crawl --max-pages 5 --word java
    Crawl {
        /// Page to start from
        #[arg(default_value = DEFAULT_SEED)]
        seed: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Stop after this many pages have been indexed
        #[arg(long, default_value_t = 1)]
        max_pages: usize,

        /// Word to look up in the index once the crawl stops
        #[arg(long, default_value = "the")]
        word: String,

        /// Queue the seed page's links before the first step
        ///
        /// The seed itself is still queued first, so it gets indexed too.
        #[arg(long)]
        prime: bool,

        /// Output the crawl report in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the internal links of a single page
    ///
    /// Example: wiki-crawler links https://en.wikipedia.org/wiki/Rust --same-host
    Links {
        /// Page to inspect
        url: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Output the links as a JSON array
        #[arg(long)]
        json: bool,
    },
}

// Flags shared by every subcommand that fetches pages
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Read pages from the fixtures directory instead of the network
    #[arg(long)]
    pub offline: bool,

    /// Directory holding stored pages, laid out as <host>/<path>
    #[arg(long, default_value = "fixtures")]
    pub fixtures: PathBuf,

    /// Seconds to wait for a live page before giving up
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Only follow links that resolve to en.wikipedia.org/wiki/
    ///
    /// Without this flag any href containing "wiki/" is followed and made
    /// absolute by prefixing https://en.wikipedia.org.
    #[arg(long)]
    pub same_host: bool,
}

impl SourceArgs {
    pub fn mode(&self) -> CrawlMode {
        if self.offline {
            CrawlMode::Offline
        } else {
            CrawlMode::Live
        }
    }

    pub fn policy(&self) -> LinkPolicy {
        if self.same_host {
            LinkPolicy::SameHost
        } else {
            LinkPolicy::Literal
        }
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout),
            fixtures_dir: self.fixtures.clone(),
            ..FetchConfig::default()
        }
    }
}
