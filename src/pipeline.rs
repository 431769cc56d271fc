// src/pipeline.rs
// =============================================================================
// One complete run: crawl -> validate -> write.
//
// Validation runs before the file is written but never stops it; the report
// is handed back to main, which prints it and picks the exit code.
// =============================================================================

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::catalogue::{ListingParser, PageFetcher};
use crate::config::CrawlConfig;
use crate::crawl::crawl_catalogue;
use crate::report::{self, ValidationReport};

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub pages: usize,
    /// Items dropped because a field couldn't be extracted.
    pub skipped: usize,
    pub output: PathBuf,
    pub validation: ValidationReport,
}

pub async fn run(config: &CrawlConfig) -> Result<RunSummary> {
    let fetcher =
        PageFetcher::new(config.catalogue_url.clone()).context("build HTTP client")?;
    let parser = ListingParser::new().context("compile listing selectors")?;

    let collector = crawl_catalogue(&fetcher, &parser, config.max_pages, config.page_delay)
        .await
        .context("crawl catalogue")?;

    let pages = collector.pages();
    let skipped = collector.skipped();
    let records = collector.into_records();

    let validation = report::validate(&records, config.expected_total);
    report::write_records(&config.output, &records, config.delimiter)?;

    for failure in &validation.failures {
        tracing::warn!(%failure, "validation rule failed");
    }

    Ok(RunSummary {
        pages,
        skipped,
        output: config.output.clone(),
        validation,
    })
}
