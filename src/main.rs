// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging and parse command-line arguments
// 2. Crawl the catalogue, validate the records and write the output file
// 3. Print the validation summary (or JSON report)
// 4. Exit with proper code (0 = success, 1 = validation failed, 2 = error)
//
// A run that fails validation still writes its file; only fetch, parse and
// I/O failures end the program without output.
// =============================================================================

mod catalogue;
mod cli;
mod config;
mod crawl;
mod error;
mod logging;
mod pipeline;
mod record;
mod report;

#[cfg(test)]
mod test_support;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use config::CrawlConfig;
use pipeline::RunSummary;

// Only one request is ever in flight, so a single-threaded runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
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

// Returns:
//   Ok(0) = all validation rules passed
//   Ok(1) = file written, but at least one rule failed
//   Err   = fetch, parse or I/O failure (exit code 2)
async fn run() -> Result<i32> {
    logging::init().context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let config = CrawlConfig::from_cli(&cli)?;
    // Progress goes to stderr; stdout only carries the summary or the JSON
    tracing::info!(catalogue = %config.catalogue_url, max_pages = config.max_pages, "crawling catalogue");

    let summary = pipeline::run(&config).await?;

    let stdout = std::io::stdout();
    render_outcome(&summary, cli.json, &mut stdout.lock())
}

// Writes the summary (or JSON report) and picks the exit code.
fn render_outcome<W: Write>(summary: &RunSummary, json: bool, out: &mut W) -> Result<i32> {
    if json {
        serde_json::to_writer_pretty(&mut *out, summary).context("serialize report")?;
        writeln!(out)?;
    } else {
        print_summary(summary, out)?;
    }
    out.flush()?;

    if summary.validation.passed() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn print_summary<W: Write>(summary: &RunSummary, out: &mut W) -> std::io::Result<()> {
    let report = &summary.validation;

    writeln!(out)?;
    writeln!(out, "=== DATA VALIDATION ===")?;
    writeln!(out, "📄 Pages crawled: {}", summary.pages)?;
    writeln!(out, "📚 Total books: {} (expected {})", report.total, report.expected)?;
    writeln!(out, "🔗 Unique URLs: {}", report.unique_urls)?;
    if summary.skipped > 0 {
        writeln!(out, "⚠️  Skipped items: {}", summary.skipped)?;
    }
    match report.mean_price {
        Some(mean) => writeln!(out, "💷 Average price: £{:.2}", mean)?,
        None => writeln!(out, "💷 Average price: n/a")?,
    }

    let histogram: Vec<String> = report::rating_histogram(report)
        .map(|(rating, count)| format!("{}★:{}", rating.stars(), count))
        .collect();
    writeln!(out, "⭐ Ratings: {}", histogram.join(", "))?;

    writeln!(out)?;
    if report.passed() {
        writeln!(out, "✅ All checks passed")?;
    } else {
        for failure in &report.failures {
            writeln!(out, "⚠️  {}", failure)?;
        }
    }
    writeln!(out, "💾 Data saved to {}", summary.output.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use url::Url;

    use crate::record::{BookRecord, Rating};

    fn summary(expected: usize) -> RunSummary {
        let records = vec![
            BookRecord {
                title: "A Light in the Attic".to_string(),
                price: 51.77,
                rating: Rating::Three,
                in_stock: true,
                url: Url::parse("https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html")
                    .unwrap(),
            },
            BookRecord {
                title: "Tipping the Velvet".to_string(),
                price: 53.74,
                rating: Rating::One,
                in_stock: false,
                url: Url::parse("https://books.toscrape.com/catalogue/tipping-the-velvet_999/index.html")
                    .unwrap(),
            },
        ];
        RunSummary {
            pages: 1,
            skipped: 1,
            output: PathBuf::from("books.csv"),
            validation: report::validate(&records, expected),
        }
    }

    #[test]
    fn test_passing_report_exits_zero() {
        let mut out = Vec::new();
        let code = render_outcome(&summary(2), false, &mut out).unwrap();
        assert_eq!(code, 0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("✅ All checks passed"));
        assert!(text.contains("⚠️  Skipped items: 1"));
        assert!(text.contains("1★:1, 2★:0, 3★:1, 4★:0, 5★:0"));
    }

    #[test]
    fn test_failing_report_exits_one() {
        let mut out = Vec::new();
        let code = render_outcome(&summary(1000), false, &mut out).unwrap();
        assert_eq!(code, 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("cardinality: expected 1000 books, collected 2"));
        assert!(!text.contains("All checks passed"));
    }

    #[test]
    fn test_json_output_is_a_single_document() {
        let mut out = Vec::new();
        let code = render_outcome(&summary(1000), true, &mut out).unwrap();
        assert_eq!(code, 1);

        // The whole of stdout must parse, with nothing before or after
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["pages"], 1);
        assert_eq!(value["skipped"], 1);
        assert_eq!(value["validation"]["total"], 2);
        assert_eq!(value["validation"]["unique_urls"], 2);
        assert_eq!(value["validation"]["failures"][0]["rule"], "cardinality");
        assert_eq!(value["validation"]["failures"][0]["expected"], 1000);
    }

    #[test]
    fn test_json_passing_report_exits_zero() {
        let mut out = Vec::new();
        let code = render_outcome(&summary(2), true, &mut out).unwrap();
        assert_eq!(code, 0);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["validation"]["failures"], serde_json::json!([]));
    }
}
