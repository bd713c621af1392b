//! 健康检查，不检查任何依赖

use axum::response::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}
