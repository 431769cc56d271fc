// src/catalogue/extract.rs
// =============================================================================
// Turns one raw ItemFragment into a BookRecord.
//
// Normalization rules:
// - title:        the link's title attribute, or its visible text if absent
// - price:        first run of ASCII digits (with at most one decimal part)
//                 in the price text, so "£51.77" -> 51.77
// - rating:       class token looked up in the fixed One..Five table
// - availability: true when the stock text contains "in stock", any case
// - url:          the item link resolved against the catalogue directory
//
// Everything here is a pure function of its inputs.
// =============================================================================

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use super::listing::ItemFragment;
use crate::error::ExtractError;
use crate::record::{BookRecord, Rating};

const IN_STOCK_PHRASE: &str = "in stock";

/// Builds a record from a fragment, resolving its link against `catalogue_url`.
pub fn extract_record(fragment: &ItemFragment, catalogue_url: &Url) -> Result<BookRecord, ExtractError> {
    Ok(BookRecord {
        title: extract_title(fragment)?,
        price: parse_price(
            fragment
                .price_text
                .as_deref()
                .ok_or(ExtractError::MissingField("price"))?,
        )?,
        rating: extract_rating(&fragment.rating_tokens)?,
        in_stock: fragment
            .availability_text
            .as_deref()
            .map(is_in_stock)
            .unwrap_or(false),
        url: resolve_item_url(
            catalogue_url,
            fragment
                .href
                .as_deref()
                .ok_or(ExtractError::MissingField("link"))?,
        )?,
    })
}

fn extract_title(fragment: &ItemFragment) -> Result<String, ExtractError> {
    match fragment.title.as_deref() {
        Some(title) if !title.trim().is_empty() => Ok(title.to_string()),
        _ if !fragment.label.is_empty() => Ok(fragment.label.clone()),
        _ => Err(ExtractError::MissingField("title")),
    }
}

/// Parses the first numeric substring of a displayed price.
pub fn parse_price(text: &str) -> Result<f64, ExtractError> {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    // Constant pattern, known to compile
    let number = NUMBER.get_or_init(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());

    let matched = number
        .find(text)
        .ok_or_else(|| ExtractError::NoNumericPrice(text.to_string()))?;

    matched
        .as_str()
        .parse::<f64>()
        .map_err(|_| ExtractError::InvalidPrice(matched.as_str().to_string()))
}

fn extract_rating(tokens: &[String]) -> Result<Rating, ExtractError> {
    if tokens.is_empty() {
        return Err(ExtractError::MissingField("rating"));
    }
    tokens
        .iter()
        .find_map(|token| token.parse::<Rating>().ok())
        .ok_or_else(|| ExtractError::UnknownRating(tokens.join(" ")))
}

fn is_in_stock(text: &str) -> bool {
    text.to_lowercase().contains(IN_STOCK_PHRASE)
}

/// Resolves an item's relative link to an absolute URL.
pub fn resolve_item_url(catalogue_url: &Url, href: &str) -> Result<Url, ExtractError> {
    let href = href.trim();
    if href.is_empty() {
        return Err(ExtractError::MissingField("link"));
    }
    catalogue_url
        .join(href)
        .map_err(|e| ExtractError::InvalidUrl {
            href: href.to_string(),
            message: e.to_string(),
        })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is OnceLock?
//    - A cell that is written at most once, then only read
//    - The regex is compiled on the first call and reused afterwards
//
// 2. Why does Url::join need a trailing slash on the base?
//    - join() follows browser rules: "catalogue/page-1.html" + "x/index.html"
//      replaces "page-1.html", while "catalogue/" + "x/index.html" appends
//    - Both give the same result here, which is why either base works
// -----------------------------------------------------------------------------
