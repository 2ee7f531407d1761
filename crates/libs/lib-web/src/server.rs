//! # Server Setup
//!
//! Router construction and HTTP server startup: load configuration, connect
//! the database, run migrations, and serve the API.

// region:    --- Imports
use crate::handlers;
use crate::middleware::{require_auth, stamp_req};
use axum::{
    routing::{get, post},
    Json, Router,
};
use lib_core::{create_pool, AppError, Config, DbPool};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::info;
// endregion: --- Imports

// region:    --- AppState
/// Application state shared across all routes.
///
/// Both the pool and the configuration are constructed once at startup and
/// injected here; nothing reads them from ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
}

impl axum::extract::FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region:    --- Server Configuration
/// Server configuration supplied by the binary.
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
    /// Database migrations path
    pub migrations_path: &'static str,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            migrations_path: "./migrations",
        }
    }
}
// endregion: --- Server Configuration

// region:    --- Server Setup
/// Initialize and start the HTTP server.
///
/// # Errors
///
/// Returns an error if configuration loading, database setup, migrations,
/// or binding the listener fails. After startup, request failures are
/// reported to the client as JSON errors and never terminate the process.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("PEOPLE API STARTING");

    dotenvy::dotenv().ok();

    info!("Loading configuration...");
    let app_config = Config::from_env().map_err(AppError::Config)?;
    app_config.validate().map_err(AppError::Config)?;

    // Ensure the data directory exists for SQLite
    if let Some(db_path) = app_config.database_url.strip_prefix("sqlite:") {
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                info!("Created database directory: {:?}", parent);
            }
        }
    }

    info!("Connecting to database...");
    let pool = create_pool(&app_config.database_url).await?;

    info!("Running database migrations from: {}", config.migrations_path);
    let migrator =
        sqlx::migrate::Migrator::new(std::path::Path::new(config.migrations_path)).await?;
    migrator.run(&pool).await?;
    info!("Migrations complete");

    let state = AppState {
        db: pool,
        config: app_config,
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!("SERVER READY: http://{}", config.bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the application router with all routes and middleware.
///
/// Public routes (`/`, `/signup`, `/login`) are registered directly; the
/// people routes are grouped behind the auth guard so no CRUD handler is
/// reachable without a verified token.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/people",
            get(handlers::people::index).post(handlers::people::create),
        )
        .route(
            "/people/{id}",
            get(handlers::people::show)
                .put(handlers::people::update)
                .delete(handlers::people::destroy),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/", get(|| async { Json(json!({ "hello": "world" })) }))
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
        .merge(protected)
        .with_state(state)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<crate::middleware::RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                },
            ),
        )
        // Outermost, so the stamp exists before the trace span is built
        .layer(axum::middleware::from_fn(stamp_req))
        // Accept requests from any origin
        .layer(CorsLayer::permissive())
}

/// Log the exposed routes at startup.
fn log_server_info() {
    info!("AUTH:");
    info!("   • POST /signup");
    info!("   • POST /login");
    info!("PEOPLE (bearer token required):");
    info!("   • GET    /people");
    info!("   • POST   /people");
    info!("   • GET    /people/{{id}}");
    info!("   • PUT    /people/{{id}}");
    info!("   • DELETE /people/{{id}}");
}
// endregion: --- Server Setup
