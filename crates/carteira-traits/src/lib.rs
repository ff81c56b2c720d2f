#![doc(issue_tracker_base_url = "https://github.com/carteira-app/carteira/issues/")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait definitions for the Carteira price chart.
//!
//! This crate provides the foundational abstractions shared by the rest of
//! the workspace: the period selector and its date-range resolution, the raw
//! historical price record as returned by the upstream price service, the
//! seam traits for fetching prices ([`PriceSource`]) and for notifying the
//! surrounding application of panel activity ([`PanelObserver`]).

/// The version of the carteira-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod observer;
pub mod range;
pub mod source;
pub mod types;

// Re-exports
pub use error::{CarteiraError, Result};
pub use observer::PanelObserver;
pub use range::{DateRange, Period};
pub use source::PriceSource;
pub use types::{HistoricalRecord, PricePoint, Symbol, Toast, ToastStatus};
