use crate::LedgerError;
use core_types::TradeRecord;

/// Durable, append-only storage for the trade ledger.
///
/// Implementations keep records in insertion order and never edit or delete
/// a stored record. They assume a single writer; callers that share a store
/// must serialize access themselves.
pub trait LedgerStore {
    /// Appends one record at the end of the ledger.
    fn append(&mut self, record: TradeRecord) -> Result<(), LedgerError>;

    /// Returns every stored record in insertion order.
    fn read_all(&self) -> Result<Vec<TradeRecord>, LedgerError>;

    fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.read_all()?.len())
    }

    fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for Box<S> {
    fn append(&mut self, record: TradeRecord) -> Result<(), LedgerError> {
        (**self).append(record)
    }

    fn read_all(&self) -> Result<Vec<TradeRecord>, LedgerError> {
        (**self).read_all()
    }

    fn len(&self) -> Result<usize, LedgerError> {
        (**self).len()
    }
}

/// A ledger that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    records: Vec<TradeRecord>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryLedger {
    fn append(&mut self, record: TradeRecord) -> Result<(), LedgerError> {
        self.records.push(record);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<TradeRecord>, LedgerError> {
        Ok(self.records.clone())
    }

    fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.records.len())
    }
}
