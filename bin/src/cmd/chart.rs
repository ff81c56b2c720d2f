//! Chart command implementation.

use anyhow::{Context, Result, bail};
use carteira::{ChartOptions, ChartPanel, FmpClient, PanelObserver, Period, Toast};

/// Observer wiring panel events to the terminal: searched tickers go to the
/// log, toasts (the not-found notification) go to stderr.
struct ConsoleObserver;

impl PanelObserver for ConsoleObserver {
    fn stock_searched(&mut self, symbol: &str) {
        log::info!("searched {symbol}");
    }

    fn toast(&mut self, toast: Toast) {
        eprintln!("{}: {}", toast.title, toast.description);
    }
}

/// Fetch `symbols` over the period window and print the chart configuration.
pub(crate) async fn render_chart(symbols: &[String], period: Period, format: &str) -> Result<()> {
    if symbols.is_empty() {
        bail!("at least one ticker symbol is required");
    }

    let client = FmpClient::from_env().context("FMP client setup failed")?;
    let mut panel = ChartPanel::new(client, Box::new(ConsoleObserver));
    panel.set_period(period).await?;

    // The first ticker is a fresh search; the rest are appended to the
    // chart, exactly like typing into the panel's search box.
    let mut rest = symbols.iter();
    if let Some(first) = rest.next() {
        panel.search(first).await?;
    }
    for symbol in rest {
        panel.set_search_term(symbol.clone());
        panel.append().await?;
    }

    if panel.store().is_empty() {
        bail!("no historical data to chart");
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(panel.options())?),
        "table" => print_table(panel.options()),
        other => bail!("unknown format: {other} (expected json or table)"),
    }

    Ok(())
}

fn print_table(options: &ChartOptions) {
    print!("{:<12}", "Date");
    for series in &options.series {
        print!(" {:>12}", series.name);
    }
    println!();
    println!("{}", "─".repeat(12 + 13 * options.series.len()));

    for (i, date) in options.x_axis.categories.iter().enumerate() {
        print!("{:<12}", date);
        for series in &options.series {
            match series.data.get(i) {
                Some(close) => print!(" {:>11.2}$", close),
                None => print!(" {:>12}", "-"),
            }
        }
        println!();
    }
}
