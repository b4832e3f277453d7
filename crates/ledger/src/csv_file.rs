use crate::{LedgerError, LedgerStore};
use chrono::NaiveDate;
use core_types::{Instrument, Outcome, Side, TradeRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CSV-specific trade struct that matches the ledger file's columns.
///
/// Decimals go through their string form so a price written as `1.0850`
/// reads back as exactly `1.0850`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerRow {
    date: NaiveDate,
    instrument: Instrument,
    name: String,
    side: Side,
    #[serde(with = "rust_decimal::serde::str")]
    entry_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    exit_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    take_profit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    stop_loss: Decimal,
    rationale: String,
    strategy_name: String,
    outcome: Outcome,
    narrative: String,
    #[serde(with = "rust_decimal::serde::str")]
    pnl_absolute: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pnl_percent: Decimal,
}

impl From<&TradeRecord> for LedgerRow {
    fn from(r: &TradeRecord) -> Self {
        Self {
            date: r.date,
            instrument: r.instrument,
            name: r.name.clone(),
            side: r.side,
            entry_price: r.entry_price,
            exit_price: r.exit_price,
            take_profit: r.take_profit,
            stop_loss: r.stop_loss,
            rationale: r.rationale.clone(),
            strategy_name: r.strategy_name.clone(),
            outcome: r.outcome,
            narrative: r.narrative.clone(),
            pnl_absolute: r.pnl_absolute,
            pnl_percent: r.pnl_percent,
        }
    }
}

impl From<LedgerRow> for TradeRecord {
    fn from(r: LedgerRow) -> Self {
        Self {
            date: r.date,
            instrument: r.instrument,
            name: r.name,
            side: r.side,
            entry_price: r.entry_price,
            exit_price: r.exit_price,
            take_profit: r.take_profit,
            stop_loss: r.stop_loss,
            rationale: r.rationale,
            strategy_name: r.strategy_name,
            outcome: r.outcome,
            narrative: r.narrative,
            pnl_absolute: r.pnl_absolute,
            pnl_percent: r.pnl_percent,
        }
    }
}

/// A ledger persisted as a single CSV file with a header row.
///
/// The file is read in full on every `read_all` and rewritten in full on
/// every `append`. A missing file is an empty ledger; it is created, along
/// with its parent directories, on the first append.
#[derive(Debug, Clone)]
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn csv_error(&self, source: csv::Error) -> LedgerError {
        LedgerError::Csv {
            path: self.path.clone(),
            source,
        }
    }

    fn write_all(&self, records: &[TradeRecord]) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| LedgerError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| self.csv_error(e))?;
        for record in records {
            writer
                .serialize(LedgerRow::from(record))
                .map_err(|e| self.csv_error(e))?;
        }
        writer.flush().map_err(|source| LedgerError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}

impl LedgerStore for CsvLedger {
    fn append(&mut self, record: TradeRecord) -> Result<(), LedgerError> {
        let mut records = self.read_all()?;
        records.push(record);
        self.write_all(&records)?;

        tracing::debug!(path = %self.path.display(), trades = records.len(), "Ledger file rewritten.");
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<TradeRecord>, LedgerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No ledger file yet, starting empty.");
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| self.csv_error(e))?;
        let records = reader
            .deserialize::<LedgerRow>()
            .enumerate()
            .map(|(i, row)| {
                row.map(TradeRecord::from).map_err(|source| LedgerError::MalformedRow {
                    path: self.path.clone(),
                    index: i + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(path = %self.path.display(), trades = records.len(), "Ledger loaded.");
        Ok(records)
    }
}
