// src/crawl/mod.rs
// =============================================================================
// Catalogue traversal.
//
// - driver:    the page loop (fetch -> parse -> extract, page after page)
// - collector: the ordered list of records the loop fills in
// =============================================================================

mod collector;
mod driver;

pub use driver::crawl_catalogue;
