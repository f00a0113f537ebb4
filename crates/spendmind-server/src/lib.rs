//! SpendMind Web Server
//!
//! Axum-based REST API for the SpendMind expense tracker.
//!
//! - Category and expense CRUD
//! - Grouped reports (monthly, by category, top days)
//! - Generated insights and a monthly PNG chart
//! - Restrictive CORS policy, security headers, request tracing
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use spendmind_core::{ChartSize, Config, Database, InsightEngine, ReportConfig};

mod handlers;

/// Maximum pagination limit
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Server configuration
#[derive(Clone, Debug, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Size of rendered charts
    pub chart_size: ChartSize,
}

/// Shared application state
pub struct AppState {
    pub db: Database,
    pub engine: InsightEngine,
    pub reports: ReportConfig,
    pub config: ServerConfig,
}

/// Create the application router
pub fn create_router(db: Database, app_config: &Config, config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        db,
        engine: InsightEngine::new(app_config.insights.clone()),
        reports: app_config.reports,
        config: config.clone(),
    });

    // Collection routes answer with and without the trailing slash
    let routes = Router::new()
        .route("/", get(handlers::health_check))
        // Categories
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/",
            get(handlers::list_categories).post(handlers::create_category),
        )
        // Expenses
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/expenses/",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        // Reports
        .route("/reports/monthly", get(handlers::report_monthly))
        .route("/reports/by-category", get(handlers::report_by_category))
        .route("/reports/daily", get(handlers::report_daily))
        // Insights
        .route("/insights", get(handlers::get_insights))
        .route("/insights/", get(handlers::get_insights))
        // Charts
        .route(
            "/charts/monthly-expenses",
            get(handlers::monthly_expenses_chart),
        );

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    db: Database,
    host: &str,
    port: u16,
    app_config: &Config,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let app = create_router(db, app_config, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();

        // Client-caused core errors keep their message and a 4xx status
        if let Some(core) = err.downcast_ref::<spendmind_core::Error>() {
            if matches!(
                core,
                spendmind_core::Error::AlreadyExists(_) | spendmind_core::Error::InvalidData(_)
            ) {
                return Self::bad_request(&core.to_string());
            }
        }

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
