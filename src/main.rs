// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, filtered by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = pages indexed, 1 = nothing indexed, 2 = error)
//
// The crawler itself never loops. This file is the caller that decides how
// many steps to run and what to do when a fetch fails.
// =============================================================================

// Module declarations - the crawl logic itself lives in the library (src/lib.rs)
mod cli; // src/cli.rs - command-line parsing
mod report; // src/report.rs - crawl summary output

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, SourceArgs};
use futures::StreamExt;
use report::CrawlReport;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use wiki_crawler::crawl::extract_internal_links;
use wiki_crawler::{CrawlOutcome, Crawler, Fetcher, Index, MemoryIndex, WikiFetcher};

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so --json output on stdout stays parseable
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            seed,
            source,
            max_pages,
            word,
            prime,
            json,
        } => handle_crawl(&seed, &source, max_pages, &word, prime, json).await,
        Commands::Links { url, source, json } => handle_links(&url, &source, json).await,
    }
}

// Handles the 'crawl' subcommand
//
// Runs crawl steps until `max_pages` pages are indexed or the frontier is
// empty. A failed fetch is logged and the crawl carries on with the next
// queued URL.
async fn handle_crawl(
    seed: &str,
    source: &SourceArgs,
    max_pages: usize,
    word: &str,
    prime: bool,
    json: bool,
) -> Result<i32> {
    let mode = source.mode();
    let fetcher = WikiFetcher::new(source.fetch_config()).context("could not build HTTP client")?;

    if !json {
        println!("🔍 Crawling from: {}", seed);
        println!("📊 Mode: {:?}, stopping after {} page(s)", mode, max_pages);
    }

    // Fetched before the crawler takes ownership of the fetcher
    let primer = if prime {
        let blocks = fetcher
            .fetch(seed, mode)
            .await
            .with_context(|| format!("could not prime the queue from {}", seed))?;
        Some(blocks)
    } else {
        None
    };

    let mut crawler =
        Crawler::new(seed, MemoryIndex::new(), fetcher).with_policy(source.policy());

    if let Some(blocks) = primer {
        let queued = crawler.queue_links(&blocks);
        if !json {
            println!("🔗 Primed the queue with {} link(s)", queued);
        }
    }

    let mut report = CrawlReport::new(seed, mode, word);

    'crawl: while report.indexed.len() < max_pages {
        let steps = crawler.stream(mode);
        futures::pin_mut!(steps);

        while let Some(step) = steps.next().await {
            match step {
                Ok(CrawlOutcome::Indexed(url)) => {
                    report.indexed.push(url);
                    if report.indexed.len() >= max_pages {
                        break 'crawl;
                    }
                }
                Ok(CrawlOutcome::Skipped) => report.skipped += 1,
                Err(e) => {
                    warn!(error = %e, network = e.is_network(), "fetch failed, moving on");
                    report.failed.push(e.to_string());
                    // The stream is done after an error; start a fresh one
                    continue 'crawl;
                }
            }
        }

        // Frontier exhausted
        break;
    }

    report.queue_size = crawler.queue_size();
    report.set_counts(crawler.index().get_counts(word));

    report::print_report(&report, json)?;

    if report.indexed.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Handles the 'links' subcommand
async fn handle_links(url: &str, source: &SourceArgs, json: bool) -> Result<i32> {
    let fetcher = WikiFetcher::new(source.fetch_config()).context("could not build HTTP client")?;

    let blocks = fetcher
        .fetch(url, source.mode())
        .await
        .with_context(|| format!("could not fetch {}", url))?;

    let links = extract_internal_links(&blocks, source.policy());

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
    } else {
        println!("🔗 {} internal link(s) in {} paragraph(s) of {}", links.len(), blocks.len(), url);
        for link in &links {
            println!("   {}", link);
        }
    }

    Ok(0)
}
