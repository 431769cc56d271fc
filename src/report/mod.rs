// src/report/mod.rs
// =============================================================================
// What happens after the crawl: quality checks and the output file.
//
// - validate: cardinality / uniqueness / positivity rules + statistics
// - writer:   the semicolon-delimited file
// =============================================================================

mod validate;
mod writer;

pub use validate::{rating_histogram, validate, ValidationReport};
pub use writer::write_records;
