// src/error.rs
// =============================================================================
// Error types for every stage of the pipeline.
//
// - FetchError:      the page could not be downloaded
// - ParseError:      the page came back but doesn't look like a catalogue page
// - ExtractError:    one book on a page couldn't be turned into a record
// - ValidationError: a quality rule failed after the whole crawl
//
// FetchError and ParseError stop the crawl, so they are grouped into
// CrawlError. The other two are handled where they happen.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot build url for page {index}: {source}")]
    InvalidPageUrl {
        index: usize,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("reading body of {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: &'static str, message: String },

    /// Neither the listing container nor a single item was found. The site
    /// markup probably changed.
    #[error("page has no book listing (looked for {selector:?})")]
    MissingListing { selector: &'static str },
}

#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("item has no {0}")]
    MissingField(&'static str),

    #[error("no numeric value in price text {0:?}")]
    NoNumericPrice(String),

    #[error("price {0:?} is not a valid number")]
    InvalidPrice(String),

    #[error("unknown rating token {0:?}")]
    UnknownRating(String),

    #[error("cannot resolve item link {href:?}: {message}")]
    InvalidUrl { href: String, message: String },
}

#[derive(Debug, Error, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("cardinality: expected {expected} books, collected {actual}")]
    Cardinality { expected: usize, actual: usize },

    #[error("uniqueness: {duplicates} duplicate url(s)")]
    Uniqueness { duplicates: usize },

    #[error("positivity: mean price is {mean:?}, expected > 0")]
    Positivity { mean: Option<f64> },
}

/// Errors that abort the whole crawl.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("page {index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: ParseError,
    },
}
