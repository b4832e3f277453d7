use crate::{LedgerError, LedgerStore};
use analytics::{EquityPoint, Statistics, WinLossDistribution};
use chrono::NaiveDate;
use core_types::{TradeDraft, TradeRecord};
use serde::{Deserialize, Serialize};

/// Everything the dashboard needs, computed from a single read of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalSummary {
    pub statistics: Statistics,
    pub distribution: WinLossDistribution,
    pub equity_curve: Vec<EquityPoint>,
}

/// The trade journal: an injected ledger store plus the analytics run over it.
#[derive(Debug)]
pub struct Journal<S> {
    store: S,
}

impl<S: LedgerStore> Journal<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Derives the P&L of a drafted trade and appends it to the ledger.
    ///
    /// Returns the record exactly as stored.
    pub fn add_trade(&mut self, draft: TradeDraft, today: NaiveDate) -> Result<TradeRecord, LedgerError> {
        let record = analytics::record(draft, today);
        self.store.append(record.clone())?;

        tracing::info!(
            trade = %record.name,
            side = %record.side,
            pnl = %record.pnl_absolute,
            pnl_pct = %record.pnl_percent,
            "Trade added."
        );
        Ok(record)
    }

    /// The full ledger in insertion order.
    pub fn trades(&self) -> Result<Vec<TradeRecord>, LedgerError> {
        self.store.read_all()
    }

    /// The ledger newest-first, the order the trade log is displayed in.
    pub fn recent_trades(&self) -> Result<Vec<TradeRecord>, LedgerError> {
        let mut trades = self.store.read_all()?;
        trades.reverse();
        Ok(trades)
    }

    pub fn statistics(&self) -> Result<Statistics, LedgerError> {
        Ok(analytics::summarize(&self.store.read_all()?))
    }

    pub fn summary(&self) -> Result<JournalSummary, LedgerError> {
        let trades = self.store.read_all()?;
        let statistics = analytics::summarize(&trades);
        Ok(JournalSummary {
            distribution: statistics.distribution(),
            equity_curve: analytics::equity_curve(&trades),
            statistics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryLedger;
    use core_types::{Instrument, Outcome, Side};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()
    }

    fn draft(name: &str, side: Side, entry: Decimal, exit: Decimal) -> TradeDraft {
        TradeDraft {
            date: None,
            instrument: Instrument::Stocks,
            name: name.into(),
            side,
            entry_price: entry,
            exit_price: exit,
            take_profit: Decimal::ZERO,
            stop_loss: Decimal::ZERO,
            rationale: String::new(),
            strategy_name: "Swing".into(),
            outcome: Outcome::ClosedManually,
            narrative: String::new(),
        }
    }

    #[test]
    fn add_trade_stores_derived_pnl() {
        let mut journal = Journal::new(MemoryLedger::new());
        let record = journal
            .add_trade(draft("MSFT", Side::Long, dec!(100), dec!(110)), today())
            .unwrap();

        assert_eq!(record.pnl_absolute, dec!(10.00));
        assert_eq!(record.pnl_percent, dec!(10.00));
        assert_eq!(record.date, today());
        assert_eq!(journal.trades().unwrap(), vec![record]);
    }

    #[test]
    fn recent_trades_are_newest_first() {
        let mut journal = Journal::new(MemoryLedger::new());
        for name in ["a", "b", "c"] {
            journal
                .add_trade(draft(name, Side::Long, dec!(1), dec!(2)), today())
                .unwrap();
        }
        let names: Vec<String> = journal.recent_trades().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[test]
    fn summary_matches_direct_summarize() {
        let mut journal = Journal::new(MemoryLedger::new());
        journal.add_trade(draft("w", Side::Long, dec!(100), dec!(200)), today()).unwrap();
        journal.add_trade(draft("l", Side::Short, dec!(100), dec!(150)), today()).unwrap();
        journal.add_trade(draft("f", Side::Short, dec!(100), dec!(100)), today()).unwrap();

        let summary = journal.summary().unwrap();
        assert_eq!(summary.statistics, analytics::summarize(&journal.trades().unwrap()));
        assert_eq!(summary.statistics, journal.statistics().unwrap());
        assert_eq!(summary.distribution, WinLossDistribution { wins: 1, losses: 1 });
        assert_eq!(summary.statistics.total_pnl, dec!(50));
        assert_eq!(summary.statistics.reward_risk_ratio, dec!(2.00));
        assert_eq!(summary.equity_curve.len(), 3);
    }

    #[test]
    fn empty_journal_summary() {
        let journal = Journal::new(MemoryLedger::new());
        let summary = journal.summary().unwrap();
        assert_eq!(summary.statistics, Statistics::new());
        assert!(summary.equity_curve.is_empty());
    }

    #[test]
    fn works_over_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trade_journal.csv");

        let mut journal = Journal::new(crate::CsvLedger::new(&path));
        journal.add_trade(draft("x", Side::Short, dec!(100), dec!(110)), today()).unwrap();

        let reopened = Journal::new(crate::CsvLedger::new(&path));
        let stats = reopened.statistics().unwrap();
        assert_eq!(stats.total_trades, 1);
        assert_eq!(stats.avg_loss, dec!(-10.00));
    }
}
