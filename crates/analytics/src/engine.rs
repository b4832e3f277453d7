use crate::pnl::{compute_pnl, round2};
use crate::report::{EquityPoint, Statistics};
use chrono::NaiveDate;
use core_types::{TradeDraft, TradeRecord};
use rust_decimal::Decimal;

/// A stateless calculator for deriving journal metrics from logged trades.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the derived P&L pair to a drafted trade.
    ///
    /// `today` is the date stamped on drafts that carry none.
    pub fn record(&self, draft: TradeDraft, today: NaiveDate) -> TradeRecord {
        let pnl = compute_pnl(draft.side, draft.entry_price, draft.exit_price);
        TradeRecord::from_draft(draft, today, pnl)
    }

    /// The main entry point for calculating the journal statistics.
    ///
    /// # Arguments
    ///
    /// * `trades` - The full ledger, in insertion order.
    pub fn summarize(&self, trades: &[TradeRecord]) -> Statistics {
        let mut report = Statistics::new();

        if trades.is_empty() {
            return report;
        }

        self.calculate_profitability(trades, &mut report);
        self.calculate_series(trades, &mut report);

        report
    }

    /// Pairs each running P&L total with the date of the trade that produced it.
    pub fn equity_curve(&self, trades: &[TradeRecord]) -> Vec<EquityPoint> {
        let mut running = Decimal::ZERO;
        trades
            .iter()
            .map(|trade| {
                running = running.saturating_add(trade.pnl_absolute);
                EquityPoint {
                    date: trade.date,
                    cumulative_pnl: running,
                }
            })
            .collect()
    }

    /// Counts, totals, rates and averages.
    fn calculate_profitability(&self, trades: &[TradeRecord], report: &mut Statistics) {
        report.total_trades = trades.len();

        let mut gross_profit = Decimal::ZERO;
        let mut gross_loss = Decimal::ZERO;

        for trade in trades {
            let pnl = trade.pnl_absolute;
            report.total_pnl = report.total_pnl.saturating_add(pnl);

            // Flat trades fall into neither bucket.
            if trade.is_win() {
                gross_profit = gross_profit.saturating_add(pnl);
                report.winning_trades += 1;
            } else if trade.is_loss() {
                gross_loss = gross_loss.saturating_add(pnl);
                report.losing_trades += 1;
            }
        }

        // --- Ratios ---
        report.win_rate = round2(
            Decimal::from(report.winning_trades) / Decimal::from(report.total_trades)
                * Decimal::ONE_HUNDRED,
        );

        if report.winning_trades > 0 {
            report.avg_profit = round2(gross_profit / Decimal::from(report.winning_trades));
        }

        if report.losing_trades > 0 {
            report.avg_loss = round2(gross_loss / Decimal::from(report.losing_trades));
        }

        // Taken from the already-rounded averages.
        if !report.avg_loss.is_zero() {
            report.reward_risk_ratio = report
                .avg_profit
                .checked_div(report.avg_loss)
                .map(|ratio| round2(ratio.abs()))
                .unwrap_or(Decimal::ZERO);
        }
    }

    /// Prefix sums of P&L in ledger order.
    fn calculate_series(&self, trades: &[TradeRecord], report: &mut Statistics) {
        report.cumulative_pnl_series = self
            .equity_curve(trades)
            .into_iter()
            .map(|point| point.cumulative_pnl)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Instrument, Outcome, Side};
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn trade_with_pnl(pnl: Decimal) -> TradeRecord {
        TradeRecord {
            date: day(1),
            instrument: Instrument::Stocks,
            name: "AAPL".into(),
            side: Side::Long,
            entry_price: dec!(100),
            exit_price: dec!(100) + pnl,
            take_profit: Decimal::ZERO,
            stop_loss: Decimal::ZERO,
            rationale: String::new(),
            strategy_name: String::new(),
            outcome: Outcome::ClosedManually,
            narrative: String::new(),
            pnl_absolute: pnl,
            pnl_percent: pnl,
        }
    }

    fn ledger(pnls: &[Decimal]) -> Vec<TradeRecord> {
        pnls.iter().copied().map(trade_with_pnl).collect()
    }

    #[test]
    fn empty_ledger_is_all_zero() {
        let stats = AnalyticsEngine::new().summarize(&[]);
        assert_eq!(stats, Statistics::new());
        assert_eq!(stats.total_trades, 0);
        assert_eq!(stats.total_pnl, Decimal::ZERO);
        assert_eq!(stats.win_rate, Decimal::ZERO);
        assert_eq!(stats.avg_profit, Decimal::ZERO);
        assert_eq!(stats.avg_loss, Decimal::ZERO);
        assert!(stats.cumulative_pnl_series.is_empty());
    }

    #[test]
    fn one_win_one_loss() {
        let stats = AnalyticsEngine::new().summarize(&ledger(&[dec!(100), dec!(-50)]));
        assert_eq!(stats.total_trades, 2);
        assert_eq!(stats.total_pnl, dec!(50));
        assert_eq!(stats.win_rate, dec!(50.00));
        assert_eq!(stats.avg_profit, dec!(100));
        assert_eq!(stats.avg_loss, dec!(-50));
        assert_eq!(stats.reward_risk_ratio, dec!(2.00));
    }

    #[test]
    fn cumulative_series_follows_insertion_order() {
        let stats = AnalyticsEngine::new().summarize(&ledger(&[dec!(10), dec!(-5), dec!(20)]));
        assert_eq!(stats.cumulative_pnl_series, vec![dec!(10), dec!(5), dec!(25)]);
    }

    #[test]
    fn flat_trade_counts_but_is_neither_win_nor_loss() {
        let stats = AnalyticsEngine::new().summarize(&ledger(&[Decimal::ZERO]));
        assert_eq!(stats.total_trades, 1);
        assert_eq!(stats.win_rate, Decimal::ZERO);
        assert_eq!(stats.winning_trades, 0);
        assert_eq!(stats.losing_trades, 0);
        assert_eq!(stats.breakeven_trades(), 1);
    }

    #[test]
    fn breakeven_trades_dilute_win_rate() {
        let stats = AnalyticsEngine::new().summarize(&ledger(&[dec!(5), Decimal::ZERO, dec!(-1)]));
        assert_eq!(stats.win_rate, dec!(33.33));
        assert_eq!(stats.distribution().wins, 1);
        assert_eq!(stats.distribution().losses, 1);
    }

    #[test]
    fn no_losses_means_zero_ratio() {
        let stats = AnalyticsEngine::new().summarize(&ledger(&[dec!(3), dec!(4)]));
        assert_eq!(stats.avg_loss, Decimal::ZERO);
        assert_eq!(stats.reward_risk_ratio, Decimal::ZERO);
        assert_eq!(stats.avg_profit, dec!(3.50));
        assert_eq!(stats.win_rate, dec!(100.00));
    }

    #[test]
    fn averages_are_rounded() {
        let stats = AnalyticsEngine::new().summarize(&ledger(&[dec!(-1), dec!(-1), dec!(-2)]));
        assert_eq!(stats.avg_loss, dec!(-1.33));
        assert_eq!(stats.avg_profit, Decimal::ZERO);
        assert_eq!(stats.reward_risk_ratio, Decimal::ZERO);
    }

    #[test]
    fn record_derives_pnl_from_prices() {
        let draft = TradeDraft {
            date: None,
            instrument: Instrument::Crypto,
            name: "ETH".into(),
            side: Side::Short,
            entry_price: dec!(100),
            exit_price: dec!(110),
            take_profit: dec!(90),
            stop_loss: dec!(112),
            rationale: String::new(),
            strategy_name: "Fade".into(),
            outcome: Outcome::SlHit,
            narrative: String::new(),
        };
        let record = AnalyticsEngine::new().record(draft, day(9));
        assert_eq!(record.date, day(9));
        assert_eq!(record.pnl_absolute, dec!(-10.00));
        assert_eq!(record.pnl_percent, dec!(-10.00));
        assert!(record.is_loss());
    }

    #[test]
    fn equity_curve_carries_dates() {
        let mut trades = ledger(&[dec!(1), dec!(2)]);
        trades[1].date = day(3);
        let curve = AnalyticsEngine::new().equity_curve(&trades);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[1].date, day(3));
        assert_eq!(curve[1].cumulative_pnl, dec!(3));
    }
}
