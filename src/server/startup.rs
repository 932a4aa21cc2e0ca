use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    readiness::{MigratorSchema, ReadinessGate, RetryPolicy, SeaOrmProbe, TokioSleeper},
};

/// Installs the global tracing subscriber.
///
/// Log level defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        tracing::warn!("Tracing subscriber already installed: {}", e);
    }
}

/// Connects to the database and runs pending migrations.
///
/// Runs the readiness gate with the retry budget from configuration: the connection is
/// retried at a fixed interval until it succeeds or the budget is spent, then every
/// pending SeaORM migration is applied in order. This function must complete
/// successfully before the HTTP listener is started.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and retry budget
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::ConfigErr)` - Retry budget is zero
/// - `Err(AppError::StartupErr)` - Database unreachable or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let policy = RetryPolicy::new(
        config.db_connect_max_attempts,
        config.db_connect_retry_interval,
    )?;
    let probe = SeaOrmProbe::new(&config.database_url, config.db_connect_timeout);

    let mut gate = ReadinessGate::new(probe, MigratorSchema, TokioSleeper, policy);
    let db = gate.run().await?;

    Ok(db)
}

/// Builds the CORS layer.
///
/// Any origin is allowed unless `cors_allowed_origins` is configured. Only the methods
/// and headers the user routes need are allowed.
///
/// # Returns
/// - `Ok(CorsLayer)` - Configured layer
/// - `Err(AppError::ConfigErr)` - An origin is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let Some(origins) = &config.cors_allowed_origins else {
        return Ok(cors.allow_origin(Any));
    };

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    value: origin.clone(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cors.allow_origin(origins))
}

/// Resolves once the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
