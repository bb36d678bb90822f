//! stepper gateway
//!
//! - Metric endpoint: /v1/stepper?key=...
//! - Settings mapping re-read per request from `settings.path`
//! - Config path: first CLI argument, default `stepper.yaml`

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use stepper_core::error::{Result, StepperError};
use stepper_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "stepper-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "stepper.yaml".to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;

    // Boot-time sanity check only; requests always see the latest file.
    match state.settings().load().await {
        Ok(s) if s.key.as_deref().map_or(true, str::is_empty) => {
            tracing::warn!(path = %state.settings().path().display(), "no shared key configured; requests cannot be meaningfully authorized");
        }
        Ok(s) => {
            for problem in s.problems() {
                tracing::warn!(%problem, "stored settings will reject or fail metric requests");
            }
        }
        Err(e) => tracing::warn!(error = %e, "settings not loadable at boot"),
    }

    let app = router::build_router(state);

    tracing::info!(%listen, "stepper-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| StepperError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| StepperError::Internal(format!("server failed: {e}")))
}
