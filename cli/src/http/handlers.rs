use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use probehost_core::ProbeRequest;
use probehost_core::request::remote_identity;

use crate::http::error::ApiError;
use crate::http::state::AppState;

const FORWARDED_FOR: &str = "X-Forwarded-For";

pub async fn probe(State(state): State<Arc<AppState>>, request: Request) -> Result<String, ApiError> {
    let probe_request = ProbeRequest::from_path(request.uri().path())?;

    let forwarded_for = request
        .headers()
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok());
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let identity = remote_identity(forwarded_for, peer, &state.policy);

    let output = state.assembler.probe(&probe_request, &identity).await?;
    Ok(format!("{output}\n"))
}
