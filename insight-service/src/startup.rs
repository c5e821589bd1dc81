//! Application startup and lifecycle management.

use crate::config::{ErrorMode, InsightConfig};
use crate::handlers;
use crate::services::providers::openai::{OpenAiChatConfig, OpenAiChatProvider};
use crate::services::providers::ChatProvider;
use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::request_id_middleware;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ChatProvider>,
    pub error_mode: ErrorMode,
}

/// Build the router with CORS, tracing, and request-id layers.
pub fn build_router(state: AppState) -> Router {
    // Wildcard origin plus credentials: with credentials enabled the origin
    // must be echoed back rather than sent as a literal `*`.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/insights", post(handlers::get_insights))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: InsightConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn ChatProvider> = Arc::new(OpenAiChatProvider::new(OpenAiChatConfig {
            api_key: config.openai.api_key.clone(),
            api_base: config.openai.api_base.clone(),
            model: config.openai.model.clone(),
        }));

        tracing::info!(
            model = %config.openai.model,
            error_mode = ?config.error_mode,
            "Initialized OpenAI chat provider"
        );

        let state = AppState {
            provider,
            error_mode: config.error_mode,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Insight service listening on port {}", self.port);
        axum::serve(self.listener, self.router).await
    }
}
