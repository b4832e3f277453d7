//! # Trade Journal Analytics
//!
//! The computation core of the journal: per-trade profit/loss and the
//! aggregate statistics shown on the dashboard.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of storage
//!   or presentation. It depends only on `core-types` (Layer 0).
//! - **Total Functions:** Nothing here returns an error. Division by zero maps to
//!   a defined zero, so every well-typed input has an answer.
//!
//! ## Public API
//!
//! - `compute_pnl`: The derived P&L pair of one trade.
//! - `record`: A draft plus its derived P&L, ready to append to a ledger.
//! - `summarize`: `Statistics` over a whole ledger.
//! - `AnalyticsEngine`: The stateless struct behind the free functions.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod pnl;
pub mod report;

use chrono::NaiveDate;
use core_types::{TradeDraft, TradeRecord};

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use pnl::compute_pnl;
pub use report::{EquityPoint, Statistics, WinLossDistribution};

/// Turns a draft into a storable record. See [`AnalyticsEngine::record`].
pub fn record(draft: TradeDraft, today: NaiveDate) -> TradeRecord {
    AnalyticsEngine::new().record(draft, today)
}

/// Statistics over the full ledger. See [`AnalyticsEngine::summarize`].
pub fn summarize(ledger: &[TradeRecord]) -> Statistics {
    AnalyticsEngine::new().summarize(ledger)
}

/// Cumulative P&L with dates. See [`AnalyticsEngine::equity_curve`].
pub fn equity_curve(ledger: &[TradeRecord]) -> Vec<EquityPoint> {
    AnalyticsEngine::new().equity_curve(ledger)
}
