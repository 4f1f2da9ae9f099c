//! Liveness probe.

use axum::extract::State;
use axum::Json;
use heroes_core::Error;

use crate::context::AppContext;
use crate::error::AppError;
use crate::extract::DbConn;

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and database are reachable"),
        (status = 500, description = "Database unavailable")
    )
)]
pub async fn health_check(
    State(ctx): State<AppContext>,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = DbConn::acquire(&ctx)?;
    db.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
