//! Observer seam for panel activity.
//!
//! The surrounding application tracks which tickers the user has acted upon
//! and owns the notification area. Rather than reaching into ambient shared
//! state, the panel reports both through this interface.

use crate::Toast;

/// Receives panel events that concern the surrounding application.
pub trait PanelObserver {
    /// A ticker was successfully searched or appended to the chart.
    fn stock_searched(&mut self, symbol: &str);

    /// A user-facing notification was raised.
    fn toast(&mut self, toast: Toast);
}
