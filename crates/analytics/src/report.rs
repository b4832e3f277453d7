use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over the whole trade ledger.
///
/// This struct is the output of the `AnalyticsEngine` and the value object
/// every dashboard surface reads from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    // I. Counts
    pub total_trades: usize,
    /// Trades with strictly positive P&L.
    pub winning_trades: usize,
    /// Trades with strictly negative P&L.
    pub losing_trades: usize,

    // II. Profitability
    pub total_pnl: Decimal,
    /// Percentage of all trades that were wins, 2 dp.
    pub win_rate: Decimal,
    /// Mean P&L of the winning trades, 2 dp.
    pub avg_profit: Decimal,
    /// Mean P&L of the losing trades, 2 dp. Zero or negative.
    pub avg_loss: Decimal,
    /// `|avg_profit / avg_loss|`, 2 dp. Not shown on the dashboard views.
    pub reward_risk_ratio: Decimal,

    // III. Series
    /// Running total of P&L, one value per trade in ledger order.
    pub cumulative_pnl_series: Vec<Decimal>,
}

impl Statistics {
    /// Creates a zeroed-out report, which is also the report of an empty ledger.
    pub fn new() -> Self {
        Self {
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            total_pnl: Decimal::ZERO,
            win_rate: Decimal::ZERO,
            avg_profit: Decimal::ZERO,
            avg_loss: Decimal::ZERO,
            reward_risk_ratio: Decimal::ZERO,
            cumulative_pnl_series: Vec::new(),
        }
    }

    /// Trades that closed exactly flat; counted in `total_trades` only.
    pub fn breakeven_trades(&self) -> usize {
        self.total_trades - self.winning_trades - self.losing_trades
    }

    pub fn distribution(&self) -> WinLossDistribution {
        WinLossDistribution {
            wins: self.winning_trades,
            losses: self.losing_trades,
        }
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

/// Win vs loss counts, the data behind the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinLossDistribution {
    pub wins: usize,
    pub losses: usize,
}

/// One point of the cumulative P&L chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub cumulative_pnl: Decimal,
}
