//! Router construction and server host for the API.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, Method, Request, header::CONTENT_TYPE},
    middleware,
    routing::{MethodRouter, delete, get, post, put},
};
use tessera_config::Config;
use tessera_data::UserStore;
use tessera_telemetry::{Metrics, build_sha};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{Span, info};

use crate::error::{ApiServerError, ApiServerResult};
use crate::http::constants::HEADER_REQUEST_ID;
use crate::http::handlers::{
    api_listing, create_user, current_config, delete_user, get_user, handle_user,
    method_not_allowed, route_not_found, update_user,
};
use crate::http::health::{health, metrics};
use crate::http::telemetry::count_requests;
use crate::state::ApiState;

type SharedState = Arc<ApiState>;

/// Axum router wrapper that hosts the Tessera routes.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Build the router with handlers closing over the supplied configuration and store.
    #[must_use]
    pub fn new(config: Config, users: Arc<dyn UserStore>, telemetry: Metrics) -> Self {
        let state = Arc::new(ApiState::new(config, users, telemetry));

        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([CONTENT_TYPE, HeaderName::from_static(HEADER_REQUEST_ID)]);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();

                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %request.uri().path(),
                    request_id = %request_id,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let layered = ServiceBuilder::new()
            .layer(tessera_telemetry::set_request_id_layer())
            .layer(tessera_telemetry::propagate_request_id_layer())
            .layer(trace_layer)
            .layer(cors_layer);

        let router = Self::routes()
            .route_layer(middleware::from_fn_with_state(
                Arc::clone(&state),
                count_requests,
            ))
            .fallback(route_not_found)
            .layer(layered)
            .with_state(state);

        Self { router }
    }

    fn routes() -> Router<SharedState> {
        Router::new()
            .route("/health", only(get(health)))
            .route("/api", only(get(api_listing)))
            .route("/config", only(get(current_config)))
            .route("/metrics", only(get(metrics)))
            .route("/user", only(get(handle_user)))
            .route("/user/create", only(post(create_user)))
            .route("/user/update", only(put(update_user)))
            .route("/user/delete", only(delete(delete_user)))
            .route("/users/{id}", only(get(get_user)))
    }

    /// Consume the server and hand back the fully layered router.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve the API on the supplied address until the listener fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> ApiServerResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        info!(%addr, "API listener bound");
        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(|source| ApiServerError::Serve { source })
    }
}

// Any method other than the registered one answers with a 405 problem document.
fn only(route: MethodRouter<SharedState>) -> MethodRouter<SharedState> {
    route.fallback(method_not_allowed)
}
