// src/crawl/collector.rs
// Accumulates records across pages, in page order then in-page order.
// Duplicates are kept; the uniqueness rule in report::validate reports them.

use crate::record::BookRecord;

#[derive(Debug, Default)]
pub struct Collector {
    records: Vec<BookRecord>,
    skipped: usize,
    pages: usize,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one page worth of records.
    pub fn push_page(&mut self, records: impl IntoIterator<Item = BookRecord>) {
        self.records.extend(records);
        self.pages += 1;
    }

    /// Counts an item that was dropped because it couldn't be extracted.
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn into_records(self) -> Vec<BookRecord> {
        self.records
    }
}
