// src/cli.rs
// =============================================================================
// Command-line interface, built with clap's derive API.
//
// Every flag is optional. The defaults come from src/config.rs, so running
// the binary with no arguments crawls the real catalogue with the surveyed
// constants and writes books.csv in the current directory.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::config;

#[derive(Parser, Debug)]
#[command(
    name = "catalogue-scraper",
    version,
    about = "Crawl a paginated book catalogue and export it as a semicolon-delimited file",
    long_about = "catalogue-scraper walks the listing pages of books.toscrape.com, extracts \
                  title, price, rating, availability and link of every book, checks the result \
                  against a few data-quality rules and writes it to a delimited text file."
)]
pub struct Cli {
    /// Root URL of the catalogue site
    #[arg(long, default_value = config::BASE_URL)]
    pub base_url: String,

    /// Stop after this many listing pages even if more are offered
    #[arg(long, default_value_t = config::MAX_PAGES)]
    pub max_pages: usize,

    /// Where to write the delimited file (overwritten if it exists)
    #[arg(short, long, default_value = config::OUTPUT_PATH)]
    pub output: PathBuf,

    /// Number of books the cardinality check expects
    #[arg(long, default_value_t = config::EXPECTED_TOTAL)]
    pub expected_count: usize,

    /// Pause between page requests, in milliseconds (0 disables it)
    #[arg(long, default_value_t = config::PAGE_DELAY_MS)]
    pub delay_ms: u64,

    /// Print the validation report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_constants() {
        let cli = Cli::parse_from(["catalogue-scraper"]);
        assert_eq!(cli.base_url, config::BASE_URL);
        assert_eq!(cli.max_pages, config::MAX_PAGES);
        assert_eq!(cli.output, PathBuf::from("books.csv"));
        assert_eq!(cli.expected_count, 1000);
        assert_eq!(cli.delay_ms, 500);
        assert!(!cli.json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "catalogue-scraper",
            "--max-pages",
            "3",
            "-o",
            "out.csv",
            "--delay-ms",
            "0",
            "--json",
        ]);
        assert_eq!(cli.max_pages, 3);
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert_eq!(cli.delay_ms, 0);
        assert!(cli.json);
    }
}
