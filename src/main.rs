mod config;
mod dto;
mod handler;
mod sendgrid;
mod service;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt().init();

    // Load config
    let cfg = config::load_config().expect("failed to locate or load config file");
    tracing::info!("Successfully loaded mail relay config");

    // Setup service
    let client = sendgrid::SendGridClient::new(cfg.clone());
    let service = service::MailService::new(client);
    let service_ptr = Arc::new(service);

    // Setup router
    let router = Router::new()
        .route("/send", post(handler::send_mail))
        .route("/", get(handler::health_check))
        .with_state(service_ptr)
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().unwrap();

    tracing::info!("Mail relay starting, listening on {}", addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
