use axum::{
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// 请求ID头部名称
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件：生成 trace_id，记录方法、路径、状态码和耗时
pub async fn logger<B>(mut req: Request<B>, next: Next<B>) -> Response {
    let trace_id = Uuid::new_v4();
    req.extensions_mut().insert(trace_id);
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let mut response = next.run(req).await;
    let status = response.status();
    let elapsed = start.elapsed().as_millis();

    if let Ok(value) = HeaderValue::from_str(&trace_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    if status.is_client_error() {
        warn!(trace_id = %trace_id, method = %method, uri = %uri, status = status.as_u16(), elapsed_ms = elapsed, "Request log");
    } else {
        info!(trace_id = %trace_id, method = %method, uri = %uri, status = status.as_u16(), elapsed_ms = elapsed, "Request log");
    }
    response
}
