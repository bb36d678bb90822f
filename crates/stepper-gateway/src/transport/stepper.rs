//! Metric endpoint: `GET /v1/stepper?key=...`.
//!
//! Flow: load settings -> access gate -> validate scale -> query count ->
//! map to degrees -> `{"count":N}`. Unauthorized requests get an empty 200.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use stepper_core::{authorize, body::count_body};

use crate::app_state::AppState;
use crate::error::HttpError;
use crate::transport::client_ip::resolve_client_ip;

#[derive(Debug, Default)]
pub struct StepperQuery {
    pub key: Option<String>,
}

impl StepperQuery {
    /// Build from raw query pairs. A repeated `key` keeps its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let key = pairs.into_iter().filter(|(k, _)| k == "key").map(|(_, v)| v).last();
        Self { key }
    }
}

pub async fn stepper(
    State(app): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    match respond(&app, Some(peer), &headers, StepperQuery::from_pairs(pairs)).await {
        Ok(resp) => resp,
        Err(e) => e.into_response(),
    }
}

/// Transport-independent body of the handler; `peer` is `None` when the
/// listener does not expose connection info.
pub async fn respond(
    app: &AppState,
    peer: Option<SocketAddr>,
    headers: &HeaderMap,
    q: StepperQuery,
) -> Result<Response, HttpError> {
    let settings = app.settings().load().await?;

    let client_ip = resolve_client_ip(headers, peer, app.cfg().gateway.trust_forwarded_for);
    if !authorize(&settings, q.key.as_deref(), client_ip.as_deref()) {
        return Ok(StatusCode::OK.into_response());
    }

    let scale = settings.max_scale()?;
    let raw = app.count_source().raw_count().await?;
    let degrees = scale.map(raw);
    tracing::debug!(raw, max = scale.get(), degrees, "stepper metric served");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        count_body(degrees),
    )
        .into_response())
}
