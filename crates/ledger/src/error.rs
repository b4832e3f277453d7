use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("I/O error on ledger file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to access ledger file {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed trade #{index} in ledger file {}: {source}", .path.display())]
    MalformedRow {
        path: PathBuf,
        index: usize,
        #[source]
        source: csv::Error,
    },
}
