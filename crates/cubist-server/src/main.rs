//! Cubist server binary.
//!
//! This is the main entry point that wires together the session store, the
//! color detector, the solver adapter, and the HTTP API. It loads
//! configuration, initializes all subsystems, starts the background session
//! sweep, and serves until the process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `cubist-config.yaml`
//! 3. Build the color detector
//! 4. Build the solver backend and adapter
//! 5. Assemble the shared application state
//! 6. Spawn the idle-session sweep task
//! 7. Serve the API

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use cubist_api::server::ServerConfig;
use cubist_api::state::AppState;
use cubist_scan::{ColorDetector, FixedPatternDetector, RandomDetector};
use cubist_solver::{RemoteSolver, ScriptedSolver, SolverAdapter, SolverBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{BackendKind, CubistConfig, DetectorKind};
use crate::error::CubistError;

/// Application entry point for the Cubist server.
///
/// # Errors
///
/// Returns an error if configuration loading or serving fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("cubist-server starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        detector = ?config.scan.detector,
        solver_backend = ?config.solver.backend,
        solver_timeout_ms = config.solver.timeout_ms,
        "Configuration loaded"
    );

    // 3. Build the color detector.
    let detector: Arc<dyn ColorDetector> = match config.scan.detector {
        DetectorKind::Fixed => Arc::new(FixedPatternDetector::new()),
        DetectorKind::Random => Arc::new(RandomDetector::new()),
    };

    // 4. Build the solver backend and adapter.
    let backend = match config.solver.backend {
        BackendKind::Remote => SolverBackend::Remote(RemoteSolver::new(&config.solver.url)),
        BackendKind::Scripted => SolverBackend::Scripted(ScriptedSolver::new()),
    };
    let solver = SolverAdapter::new(backend, Duration::from_millis(config.solver.timeout_ms));
    info!(backend = solver.backend_name(), "Solver adapter ready");

    // 5. Assemble the shared application state.
    let state = Arc::new(AppState::new(detector, solver));

    // 6. Spawn the idle-session sweep.
    spawn_session_sweep(
        Arc::clone(&state),
        config.scan.session_ttl_seconds,
        config.scan.sweep_interval_seconds,
    );
    info!(
        session_ttl_seconds = config.scan.session_ttl_seconds,
        sweep_interval_seconds = config.scan.sweep_interval_seconds,
        "Session sweep started"
    );

    // 7. Serve.
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    cubist_api::start_server(&server_config, state)
        .await
        .map_err(CubistError::from)?;

    info!("cubist-server shutdown complete");
    Ok(())
}

/// Load the server configuration from `cubist-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<CubistConfig, CubistError> {
    let config_path = Path::new("cubist-config.yaml");
    if config_path.exists() {
        let config = CubistConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(CubistConfig::default())
    }
}

/// Start the background task that evicts idle sessions.
fn spawn_session_sweep(state: Arc<AppState>, ttl_seconds: u64, sweep_interval_seconds: u64) {
    let max_idle = chrono::Duration::seconds(i64::try_from(ttl_seconds).unwrap_or(i64::MAX));
    let mut interval =
        tokio::time::interval(Duration::from_secs(sweep_interval_seconds.max(1)));

    tokio::spawn(async move {
        loop {
            interval.tick().await;
            let evicted = state.sessions.expire_idle(max_idle).await;
            if evicted > 0 {
                info!(evicted, "idle sessions evicted");
            }
        }
    });
}
