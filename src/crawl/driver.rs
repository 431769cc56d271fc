// src/crawl/driver.rs
// =============================================================================
// Walks the catalogue one listing page at a time.
//
// How it works:
// 1. Fetch page 1
// 2. Split it into item fragments and check for a "next" link
// 3. Extract a record from every fragment (bad items are skipped and counted)
// 4. Move on to page n+1 while a "next" link exists and n < max_pages
//
// The only state is the page index and the "more pages" flag. Pages are
// never fetched concurrently: each request is awaited before the next one
// starts. A failed fetch or an unrecognizable page aborts the whole crawl.
// =============================================================================

use std::time::Duration;

use url::Url;

use super::collector::Collector;
use crate::catalogue::{extract_record, ListingParser, PageFetcher};
use crate::error::CrawlError;

/// What one page contributed to the crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageOutcome {
    items: usize,
    has_next: bool,
}

/// Crawls pages `1..=max_pages`, stopping early when a page has no "next"
/// link or no items.
pub async fn crawl_catalogue(
    fetcher: &PageFetcher,
    parser: &ListingParser,
    max_pages: usize,
    page_delay: Duration,
) -> Result<Collector, CrawlError> {
    let mut collector = Collector::new();

    for index in 1..=max_pages {
        if index > 1 && !page_delay.is_zero() {
            tokio::time::sleep(page_delay).await;
        }

        tracing::info!(page = index, "fetching listing page");
        let html = fetcher.fetch_page(index).await?;

        let outcome = collect_page(parser, &html, fetcher.catalogue_url(), index, &mut collector)?;

        if outcome.items == 0 {
            tracing::warn!(page = index, "page lists no books; assuming end of catalogue");
            break;
        }
        if !outcome.has_next {
            tracing::info!(page = index, "no next page; traversal complete");
            break;
        }
        if index == max_pages {
            tracing::info!(max_pages, "page limit reached; stopping");
        }
    }

    tracing::info!(
        pages = collector.pages(),
        books = collector.records().len(),
        skipped = collector.skipped(),
        "crawl finished"
    );

    Ok(collector)
}

// Kept synchronous so the parsed document never lives across an await.
fn collect_page(
    parser: &ListingParser,
    html: &str,
    catalogue_url: &Url,
    index: usize,
    collector: &mut Collector,
) -> Result<PageOutcome, CrawlError> {
    let listing = parser
        .parse(html)
        .map_err(|source| CrawlError::Parse { index, source })?;
    let has_next = listing.has_next();
    if listing.is_empty() {
        tracing::debug!(page = index, "listing container holds no items");
    }

    let mut records = Vec::with_capacity(listing.len());
    for (position, fragment) in listing.into_fragments().enumerate() {
        match extract_record(&fragment, catalogue_url) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(page = index, item = position + 1, error = %err, "skipping item");
                collector.record_skip();
            }
        }
    }

    let items = records.len();
    tracing::debug!(page = index, items, has_next, "page parsed");
    collector.push_page(records);

    Ok(PageOutcome { items, has_next })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is collect_page not async?
//    - scraper's Html document is not Send
//    - Keeping it inside a plain function guarantees it is dropped before
//      the next .await, so the future stays simple
//
// 2. What does `?` do with two different error types here?
//    - fetch_page returns FetchError, the loop returns CrawlError
//    - CrawlError has #[from] FetchError, so `?` converts automatically
//    - ParseError needs the page index too, so it goes through map_err
//
// 3. Why 1..=max_pages?
//    - Page numbers on the site start at 1
//    - ..= is an inclusive range, so the last page is max_pages itself
// -----------------------------------------------------------------------------
