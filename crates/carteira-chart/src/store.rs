//! The ordered store of currently displayed ticker series.

use carteira_traits::HistoricalRecord;

/// Ordered collection of the raw historical records currently on the chart.
///
/// Insertion order is display order: the first record drives the shared date
/// axis and the legend lists tickers in the order they were added. Symbols
/// are unique-ish by convention only; appending the same ticker twice is not
/// prevented.
///
/// The store starts empty and is only ever mutated by a successful fetch; a
/// failed lookup leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    records: Vec<HistoricalRecord>,
}

impl SeriesStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records currently displayed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The records in display order.
    #[must_use]
    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    /// The displayed symbols in display order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.symbol.as_str())
    }

    /// Discard everything and show only `record`. Used for a fresh search.
    pub fn replace(&mut self, record: HistoricalRecord) {
        self.records = vec![record];
    }

    /// Add `record` after the existing ones. Used for "add ticker".
    pub fn append(&mut self, record: HistoricalRecord) {
        self.records.push(record);
    }

    /// Swap every record wholesale, preserving the caller's order.
    /// Used after a period change re-fetches the displayed tickers.
    pub fn replace_all(&mut self, records: Vec<HistoricalRecord>) {
        self.records = records;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbol: &str) -> HistoricalRecord {
        HistoricalRecord::new(symbol, vec![])
    }

    #[test]
    fn test_starts_empty() {
        let store = SeriesStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_replace_always_yields_single_record() {
        let mut store = SeriesStore::new();
        store.append(record("AAPL"));
        store.append(record("MSFT"));
        store.append(record("GOOG"));

        store.replace(record("NFLX"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].symbol, "NFLX");
    }

    #[test]
    fn test_append_grows_by_one_and_preserves_order() {
        let mut store = SeriesStore::new();
        store.replace(record("AAPL"));
        store.append(record("MSFT"));

        assert_eq!(store.len(), 2);
        let symbols: Vec<&str> = store.symbols().collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_append_does_not_dedupe() {
        let mut store = SeriesStore::new();
        store.replace(record("AAPL"));
        store.append(record("AAPL"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_all_preserves_caller_order() {
        let mut store = SeriesStore::new();
        store.replace(record("AAPL"));
        store.append(record("MSFT"));

        store.replace_all(vec![record("AAPL"), record("MSFT")]);
        let symbols: Vec<&str> = store.symbols().collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    }
}
