use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::{Duration as ChronoDuration, Utc};
use futures::future::try_join;
use gigpay::config::CONFIG;
use gigpay::error::GigPayError;
use gigpay::models::{PaymentRecord, PaymentStatus, ViewerRole};
use gigpay::presenter::{HistoryView, present};
use gigpay::report::export_report;
use gigpay::roles::{InMemoryRoleDirectory, RoleResolver};
use gigpay::store::in_memory::InMemoryPaymentStore;
use gigpay::PaymentFetcher;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use uuid::Uuid;

// Error response struct
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// Newtype wrapper for GigPayError to implement IntoResponse
struct ApiError(GigPayError);

impl From<GigPayError> for ApiError {
    fn from(err: GigPayError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0 {
            GigPayError::Network(_) => StatusCode::BAD_GATEWAY,
            GigPayError::Auth => StatusCode::UNAUTHORIZED,
            GigPayError::EmptyDataset => StatusCode::CONFLICT,
            GigPayError::RenderFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GigPayError::RoleUnresolved(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

#[derive(Clone)]
struct AppState {
    store: Arc<InMemoryPaymentStore>,
    roles: Arc<InMemoryRoleDirectory>,
}

// Session handling lives upstream; the viewer id in the path stands in
// for the authenticated session identity.
async fn get_payment_history(
    State(state): State<AppState>,
    Path(viewer_id): Path<String>,
) -> Result<Json<HistoryView>, ApiError> {
    let fetcher = PaymentFetcher::new(state.store.clone());
    let (records, role) = try_join(
        fetcher.fetch_history(&viewer_id),
        state.roles.resolve_role(&viewer_id),
    )
    .await?;
    Ok(Json(present(&records, role)))
}

async fn download_report(
    State(state): State<AppState>,
    Path(viewer_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let fetcher = PaymentFetcher::new(state.store.clone());
    let (records, role) = try_join(
        fetcher.fetch_history(&viewer_id),
        state.roles.resolve_role(&viewer_id),
    )
    .await?;
    let bytes = export_report(&records, role)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"historique-paiements.pdf\"",
            ),
        ],
        bytes,
    ))
}

async fn seed_demo_data(store: &InMemoryPaymentStore, roles: &InMemoryRoleDirectory) {
    roles.assign("freelancer-demo", ViewerRole::Freelancer).await;
    roles.assign("client-demo", ViewerRole::Client).await;

    let now = Utc::now();
    store
        .seed(
            "freelancer-demo",
            vec![
                PaymentRecord {
                    id: Uuid::new_v4().to_string(),
                    amount: 450.0,
                    counterparty_name: "Studio Lumen".to_string(),
                    description: "Refonte du site vitrine".to_string(),
                    date: now - ChronoDuration::days(3),
                    status: PaymentStatus::Completed,
                },
                PaymentRecord {
                    id: Uuid::new_v4().to_string(),
                    amount: 120.5,
                    counterparty_name: "Atelier Nova".to_string(),
                    description: "Logo et charte graphique".to_string(),
                    date: now - ChronoDuration::days(12),
                    status: PaymentStatus::Pending,
                },
            ],
        )
        .await;
    store
        .seed(
            "client-demo",
            vec![PaymentRecord {
                id: Uuid::new_v4().to_string(),
                amount: 890.0,
                counterparty_name: "Maya Okonkwo".to_string(),
                description: "Application mobile, sprint 2".to_string(),
                date: now - ChronoDuration::days(1),
                status: PaymentStatus::Completed,
            }],
        )
        .await;
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(CONFIG.log_level.as_str())
        .init();

    let store = Arc::new(InMemoryPaymentStore::new());
    let roles = Arc::new(InMemoryRoleDirectory::new());
    seed_demo_data(&store, &roles).await;
    let state = AppState { store, roles };

    // Define API routes
    let app = Router::new()
        // add / route with a simple health check
        .route("/", get(|| async { "OK" }))
        .route("/payments/{viewer_id}", get(get_payment_history))
        .route("/payments/{viewer_id}/report", get(download_report))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()) // Request tracing
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
