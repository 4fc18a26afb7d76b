pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::http::routes::create_router;
use crate::http::state::AppState;

/// Serves on every interface until the listener fails.
pub async fn serve(state: Arc<AppState>, port: u16) -> Result<(), std::io::Error> {
    let app = create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Serving on :{port}");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await
}
