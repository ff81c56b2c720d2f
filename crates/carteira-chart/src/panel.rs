//! The chart panel: user-facing operations over the store and projection.
//!
//! A [`ChartPanel`] owns the series store, the derived chart options, the
//! pending search term, and the active period. It is single-threaded and
//! event-driven: each operation is one suspension point awaiting the price
//! source, and the store is only touched once a fetch has succeeded.

use carteira_traits::{
    DateRange, HistoricalRecord, PanelObserver, Period, PriceSource, Result, Toast,
};

use crate::{options::ChartOptions, store::SeriesStore};

/// Toast headline for a failed ticker lookup.
const NOT_FOUND_TITLE: &str = "Oops";
/// Toast body for a failed ticker lookup.
const NOT_FOUND_DESCRIPTION: &str = "Não foi possível encontrar o ticker informado";

/// The price chart panel core.
///
/// Generic over its [`PriceSource`] so the whole flow runs against a fake
/// source in tests. The [`PanelObserver`] receives the ticker acted upon
/// after every successful mutation, and every user-facing notification.
pub struct ChartPanel<S> {
    source: S,
    observer: Box<dyn PanelObserver>,
    period: Period,
    search_term: String,
    store: SeriesStore,
    options: ChartOptions,
    loading_search: bool,
    loading_append: bool,
}

impl<S> std::fmt::Debug for ChartPanel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartPanel")
            .field("period", &self.period)
            .field("search_term", &self.search_term)
            .field("tickers", &self.store.len())
            .finish_non_exhaustive()
    }
}

impl<S: PriceSource> ChartPanel<S> {
    /// Create a panel with an empty store and the default (monthly) period.
    #[must_use]
    pub fn new(source: S, observer: Box<dyn PanelObserver>) -> Self {
        Self {
            source,
            observer,
            period: Period::default(),
            search_term: String::new(),
            store: SeriesStore::new(),
            options: ChartOptions::default(),
            loading_search: false,
            loading_append: false,
        }
    }

    /// The active aggregation period.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// The pending search-input text.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Update the pending search-input text.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The currently displayed records.
    #[must_use]
    pub const fn store(&self) -> &SeriesStore {
        &self.store
    }

    /// The chart configuration derived from the store.
    #[must_use]
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Whether a search fetch is in flight.
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.loading_search
    }

    /// Whether an add-ticker fetch is in flight.
    #[must_use]
    pub const fn is_appending(&self) -> bool {
        self.loading_append
    }

    /// Search for `ticker` and replace the chart with its series.
    ///
    /// An unknown ticker raises the not-found toast and leaves the store
    /// untouched.
    ///
    /// # Errors
    ///
    /// Transport and decoding failures propagate unrecovered; no retry, no
    /// timeout.
    pub async fn search(&mut self, ticker: &str) -> Result<()> {
        self.loading_search = true;
        let fetched = self.fetch(ticker).await;
        self.loading_search = false;

        match fetched {
            Ok(record) => {
                self.store.replace(record);
                self.finish_mutation(ticker);
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                self.notify_not_found(ticker);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Add the pending search term's ticker to the chart.
    ///
    /// Same failure behavior as [`ChartPanel::search`].
    ///
    /// # Errors
    ///
    /// Transport and decoding failures propagate unrecovered.
    pub async fn append(&mut self) -> Result<()> {
        let ticker = self.search_term.clone();

        self.loading_append = true;
        let fetched = self.fetch(&ticker).await;
        self.loading_append = false;

        match fetched {
            Ok(record) => {
                self.store.append(record);
                self.finish_mutation(&ticker);
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                self.notify_not_found(&ticker);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Switch the aggregation period and re-fetch every displayed ticker
    /// over the new range.
    ///
    /// Re-fetches run strictly sequentially, one ticker at a time, in store
    /// order; total latency scales with the number of displayed tickers. A
    /// ticker that has gone missing raises the ordinary not-found toast and
    /// keeps its previous record, so store length and symbol order are
    /// invariant across the switch.
    ///
    /// # Errors
    ///
    /// Transport and decoding failures abort the pass and propagate.
    pub async fn set_period(&mut self, period: Period) -> Result<()> {
        self.period = period;
        let range = DateRange::resolve(period);

        let mut refreshed = self.store.records().to_vec();
        for record in &mut refreshed {
            match self.source.historical(&record.symbol, &range).await {
                Ok(updated) => *record = updated,
                Err(err) if err.is_not_found() => {
                    let symbol = record.symbol.clone();
                    self.notify_not_found(&symbol);
                }
                Err(err) => return Err(err),
            }
        }

        self.store.replace_all(refreshed);
        self.options.apply(&self.store);
        Ok(())
    }

    async fn fetch(&self, ticker: &str) -> Result<HistoricalRecord> {
        let range = DateRange::resolve(self.period);
        self.source.historical(ticker, &range).await
    }

    /// Post-mutation bookkeeping shared by search and append: clear the
    /// input, tell the application which ticker was acted upon, reproject.
    fn finish_mutation(&mut self, ticker: &str) {
        self.search_term.clear();
        self.observer.stock_searched(ticker);
        self.options.apply(&self.store);
    }

    fn notify_not_found(&mut self, ticker: &str) {
        log::warn!("no historical prices for {ticker}");
        self.observer
            .toast(Toast::error(NOT_FOUND_TITLE, NOT_FOUND_DESCRIPTION));
    }
}
