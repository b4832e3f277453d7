use crate::enums::{Instrument, Outcome, Side};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The derived profit/loss pair stored alongside every trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pnl {
    /// Signed price difference in the trade's favour, 2 dp.
    pub absolute: Decimal,
    /// `absolute` as a percentage of the entry price, 2 dp.
    pub percent: Decimal,
}

/// A trade as entered on the form, before the derived P&L fields exist.
///
/// The date is optional; the collaborator stamps the current date when it is
/// missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDraft {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub instrument: Instrument,
    #[serde(default)]
    pub name: String,
    pub side: Side,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    #[serde(default)]
    pub take_profit: Decimal,
    #[serde(default)]
    pub stop_loss: Decimal,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub strategy_name: String,
    pub outcome: Outcome,
    #[serde(default)]
    pub narrative: String,
}

/// One logged transaction, exactly as persisted in the ledger.
///
/// `pnl_absolute` and `pnl_percent` are computed once when the record is
/// created and are never recomputed from the stored prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub date: NaiveDate,
    pub instrument: Instrument,
    pub name: String,
    pub side: Side,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub take_profit: Decimal,
    pub stop_loss: Decimal,
    pub rationale: String,
    pub strategy_name: String,
    pub outcome: Outcome,
    pub narrative: String,
    pub pnl_absolute: Decimal,
    pub pnl_percent: Decimal,
}

impl TradeRecord {
    /// Builds a record from a draft and its already-derived P&L.
    ///
    /// `date` is used only when the draft carries none.
    pub fn from_draft(draft: TradeDraft, date: NaiveDate, pnl: Pnl) -> Self {
        Self {
            date: draft.date.unwrap_or(date),
            instrument: draft.instrument,
            name: draft.name,
            side: draft.side,
            entry_price: draft.entry_price,
            exit_price: draft.exit_price,
            take_profit: draft.take_profit,
            stop_loss: draft.stop_loss,
            rationale: draft.rationale,
            strategy_name: draft.strategy_name,
            outcome: draft.outcome,
            narrative: draft.narrative,
            pnl_absolute: pnl.absolute,
            pnl_percent: pnl.percent,
        }
    }

    pub fn is_win(&self) -> bool {
        self.pnl_absolute > Decimal::ZERO
    }

    pub fn is_loss(&self) -> bool {
        self.pnl_absolute < Decimal::ZERO
    }
}
