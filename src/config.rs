// src/config.rs
// =============================================================================
// Fixed crawl parameters.
//
// The constants below describe the catalogue as it was when this tool was
// written. They are also the defaults of the matching CLI flags, so a plain
// `catalogue-scraper` run uses exactly these values.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use url::Url;

use crate::cli::Cli;

/// Root of the catalogue site.
pub const BASE_URL: &str = "https://books.toscrape.com/";

/// Listing pages live under this directory, and item links are relative to it.
pub const CATALOGUE_DIR: &str = "catalogue/";

/// Upper bound on pages, even if the site keeps offering a "next" link.
pub const MAX_PAGES: usize = 50;

/// Number of books the catalogue held when it was surveyed.
pub const EXPECTED_TOTAL: usize = 1000;

pub const OUTPUT_PATH: &str = "books.csv";

/// Semicolon keeps decimal points and commas in titles out of the way.
pub const DELIMITER: u8 = b';';

/// Pause between two page requests.
pub const PAGE_DELAY_MS: u64 = 500;

pub const USER_AGENT: &str = concat!("catalogue-scraper/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Directory the listing pages are served from (`<base>/catalogue/`).
    pub catalogue_url: Url,
    pub max_pages: usize,
    pub expected_total: usize,
    pub output: PathBuf,
    pub delimiter: u8,
    pub page_delay: Duration,
}

impl CrawlConfig {
    /// Builds the configuration for a site rooted at `base_url`.
    pub fn for_base(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| anyhow!("Invalid base URL '{}': {}", base_url, e))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(anyhow!("Base URL must be http/https: {}", base));
        }
        // join() replaces the last path segment unless the path ends in '/'
        let base = if base.path().ends_with('/') {
            base
        } else {
            let mut with_slash = base.clone();
            with_slash.set_path(&format!("{}/", base.path()));
            with_slash
        };
        let catalogue_url = base
            .join(CATALOGUE_DIR)
            .map_err(|e| anyhow!("Cannot build catalogue URL from '{}': {}", base, e))?;

        Ok(Self {
            catalogue_url,
            max_pages: MAX_PAGES,
            expected_total: EXPECTED_TOTAL,
            output: PathBuf::from(OUTPUT_PATH),
            delimiter: DELIMITER,
            page_delay: Duration::from_millis(PAGE_DELAY_MS),
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Self::for_base(&cli.base_url)?;
        if cli.max_pages == 0 {
            return Err(anyhow!("--max-pages must be at least 1"));
        }
        config.max_pages = cli.max_pages;
        config.expected_total = cli.expected_count;
        config.output = cli.output.clone();
        config.page_delay = Duration::from_millis(cli.delay_ms);
        Ok(config)
    }
}
