//! # Trade Journal Ledger Crate
//!
//! This crate is the journal's "permanent archive": the append-only store of
//! logged trades and the `Journal` service that runs analytics over it.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Adapter:** All persistence details live here behind the
//!   `LedgerStore` trait. The analytics core never sees a file.
//! - **Append-Only:** Records are written once, in insertion order, with their
//!   derived P&L already attached. Nothing is edited or deleted in place.
//! - **Single Writer:** Stores do no locking. Whoever shares a store across
//!   threads is responsible for serializing writes.
//!
//! ## Public API
//!
//! - `LedgerStore`: The storage interface (`append`, `read_all`).
//! - `CsvLedger`: A flat-file CSV implementation.
//! - `MemoryLedger`: An in-process implementation.
//! - `Journal`: Adds trades and produces the dashboard summary.
//! - `LedgerError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod csv_file;
pub mod error;
pub mod journal;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use csv_file::CsvLedger;
pub use error::LedgerError;
pub use journal::{Journal, JournalSummary};
pub use store::{LedgerStore, MemoryLedger};
