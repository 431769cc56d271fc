// src/report/validate.rs
// =============================================================================
// Data-quality checks run once the crawl has finished.
//
// Three independent rules, each either passes or yields one ValidationError:
// 1. cardinality: exactly `expected_total` records were collected
// 2. uniqueness:  no two records share a url
// 3. positivity:  the mean price is strictly greater than zero
//
// The report also carries a few statistics for the summary (unique url count,
// mean price, rating histogram). Failing rules never block writing the file.
// =============================================================================

use std::collections::HashSet;

use serde::Serialize;

use crate::error::ValidationError;
use crate::record::{BookRecord, Rating};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub total: usize,
    pub expected: usize,
    pub unique_urls: usize,
    pub mean_price: Option<f64>,
    /// `rating_counts[i]` is the number of books rated `i + 1` stars.
    pub rating_counts: [usize; 5],
    pub failures: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn validate(records: &[BookRecord], expected_total: usize) -> ValidationReport {
    let unique_urls = records
        .iter()
        .map(|r| r.url.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mean_price = if records.is_empty() {
        None
    } else {
        Some(records.iter().map(|r| r.price).sum::<f64>() / records.len() as f64)
    };

    let mut rating_counts = [0usize; 5];
    for record in records {
        rating_counts[usize::from(record.rating.stars()) - 1] += 1;
    }

    let failures = [
        check_cardinality(records.len(), expected_total),
        check_uniqueness(records.len(), unique_urls),
        check_positivity(mean_price),
    ]
    .into_iter()
    .flatten()
    .collect();

    ValidationReport {
        total: records.len(),
        expected: expected_total,
        unique_urls,
        mean_price,
        rating_counts,
        failures,
    }
}

fn check_cardinality(actual: usize, expected: usize) -> Option<ValidationError> {
    (actual != expected).then_some(ValidationError::Cardinality { expected, actual })
}

fn check_uniqueness(total: usize, unique: usize) -> Option<ValidationError> {
    (unique < total).then_some(ValidationError::Uniqueness {
        duplicates: total - unique,
    })
}

fn check_positivity(mean: Option<f64>) -> Option<ValidationError> {
    match mean {
        Some(mean) if mean > 0.0 => None,
        _ => Some(ValidationError::Positivity { mean }),
    }
}

/// Number of books for each rating, in star order.
pub fn rating_histogram(report: &ValidationReport) -> impl Iterator<Item = (Rating, usize)> + '_ {
    Rating::ALL.into_iter().zip(report.rating_counts.iter().copied())
}
