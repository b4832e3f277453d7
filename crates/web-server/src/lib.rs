use axum::{
    routing::get,
    Router,
};
use ledger::{Journal, LedgerStore};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
// Note: Tracing is initialized by the binary, never here.

pub mod error;
pub mod handlers;

/// Any ledger backend the server can own.
pub type DynStore = Box<dyn LedgerStore + Send>;

/// The shared application state that all handlers can access.
///
/// The mutex is what keeps the ledger at a single writer. It is a blocking
/// mutex: it is only ever taken inside `spawn_blocking`.
pub struct AppState {
    pub journal: Mutex<Journal<DynStore>>,
}

impl AppState {
    pub fn new(store: DynStore) -> Arc<Self> {
        Arc::new(Self {
            journal: Mutex::new(Journal::new(store)),
        })
    }
}

/// Builds the router with all API routes and middleware.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/trades",
            get(handlers::list_trades).post(handlers::add_trade),
        )
        .route("/api/summary", get(handlers::get_summary))
        .with_state(state)
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, store: DynStore) -> anyhow::Result<()> {
    let app = app(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
