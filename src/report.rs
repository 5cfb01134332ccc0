// src/report.rs
// =============================================================================
// What the `crawl` subcommand prints when it is done.
//
// The report collects every step outcome plus the word counts the user asked
// for, and prints them either as a table for humans or as JSON for scripts.
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use wiki_crawler::crawl::CrawlMode;

// URLs longer than this are shortened in the table
const URL_WIDTH: usize = 70;

#[derive(Debug, Serialize)]
pub struct CrawlReport {
    pub seed: String,
    pub mode: CrawlMode,
    /// Pages indexed, in the order they were crawled
    pub indexed: Vec<String>,
    /// Steps that hit an already indexed page
    pub skipped: usize,
    /// One message per failed fetch
    pub failed: Vec<String>,
    /// URLs still waiting in the frontier
    pub queue_size: usize,
    pub word: String,
    /// Occurrences of `word` per indexed page, sorted by URL
    pub counts: BTreeMap<String, u32>,
}

impl CrawlReport {
    pub fn new(seed: &str, mode: CrawlMode, word: &str) -> Self {
        Self {
            seed: seed.to_string(),
            mode,
            indexed: Vec::new(),
            skipped: 0,
            failed: Vec::new(),
            queue_size: 0,
            word: word.to_string(),
            counts: BTreeMap::new(),
        }
    }

    pub fn set_counts(&mut self, counts: HashMap<String, u32>) {
        self.counts = counts.into_iter().collect();
    }

    pub fn total_occurrences(&self) -> u32 {
        self.counts.values().sum()
    }
}

// Prints the report either as a table or JSON
pub fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_table(report);
    }
    Ok(())
}

fn print_table(report: &CrawlReport) {
    println!("{:<72} {:>8}", "URL", "COUNT");
    println!("{}", "=".repeat(81));

    for (url, count) in &report.counts {
        println!("{:<72} {:>8}", shorten(url), count);
    }

    println!();
    println!("📊 Summary for \"{}\":", report.word);
    println!("   📄 Indexed: {}", report.indexed.len());
    println!("   ⏭️  Skipped: {}", report.skipped);
    println!("   ❌ Failed: {}", report.failed.len());
    println!("   📋 Still queued: {}", report.queue_size);
    println!("   🔢 Occurrences: {}", report.total_occurrences());
}

// Cuts long URLs down to the table width, on a char boundary
fn shorten(url: &str) -> String {
    if url.chars().count() > URL_WIDTH {
        let head: String = url.chars().take(URL_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}
