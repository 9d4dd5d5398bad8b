use axum::Server;
use signup_backend::{AppState, config::Config, error::AppError, init_tracing, routes};
use std::{net::SocketAddr, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    init_tracing(&config);

    let addr: SocketAddr = config
        .server_address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

    let state = Arc::new(AppState::new(config));
    let app = routes::create_router(state);

    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))
}
