use crate::{error::AppError, AppState, DynStore};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use core_types::{TradeDraft, TradeRecord};
use ledger::{Journal, JournalSummary, LedgerError};
use serde::Deserialize;
use std::sync::Arc;

/// Runs `f` against the journal on the blocking pool.
///
/// Ledger backends do synchronous file I/O, so they never run on a runtime
/// worker. The lock is held for the whole call, keeping a single writer.
async fn with_journal<T, F>(state: Arc<AppState>, f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&mut Journal<DynStore>) -> Result<T, LedgerError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || -> Result<T, AppError> {
        let mut journal = state.journal.lock().map_err(|_| AppError::Poisoned)?;
        Ok(f(&mut *journal)?)
    })
    .await?
}

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    /// Return at most this many of the newest trades.
    pub limit: Option<usize>,
}

/// # GET /api/trades
/// The trade log, newest first.
pub async fn list_trades(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogQuery>,
) -> Result<Json<Vec<TradeRecord>>, AppError> {
    let mut trades = with_journal(state, |journal| journal.recent_trades()).await?;
    if let Some(limit) = query.limit {
        trades.truncate(limit);
    }
    Ok(Json(trades))
}

/// # POST /api/trades
/// Logs a new trade. A draft without a date is stamped with today's date.
pub async fn add_trade(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<TradeDraft>,
) -> Result<(StatusCode, Json<TradeRecord>), AppError> {
    let today = chrono::Local::now().date_naive();
    let record = with_journal(state, move |journal| journal.add_trade(draft, today)).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// # GET /api/summary
/// Statistics, win/loss distribution and the cumulative P&L curve.
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Result<Json<JournalSummary>, AppError> {
    let summary = with_journal(state, |journal| journal.summary()).await?;
    Ok(Json(summary))
}
