// src/catalogue/mod.rs
// =============================================================================
// Everything that knows about the catalogue site itself.
//
// Submodules:
// - fetch:   downloads one listing page by its 1-based index
// - listing: splits a page into raw item fragments + "is there a next page?"
// - extract: turns one raw fragment into a normalized BookRecord
//
// If the site changes its markup, listing.rs is the only file that should
// need to change.
// =============================================================================

mod extract;
mod fetch;
mod listing;

pub use extract::extract_record;
pub use fetch::PageFetcher;
pub use listing::ListingParser;
