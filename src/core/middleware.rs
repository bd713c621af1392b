//! 核心中间件模块

use axum::{extract::Request, http::header, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(%method, %uri, %status, elapsed_ms, ?user_agent, "请求处理失败");
    } else {
        info!(%method, %uri, %status, elapsed_ms, ?user_agent, "请求完成");
    }

    response
}
