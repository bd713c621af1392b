//! 路由装配与服务启动

use axum::{
    http::Uri,
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    app::{cart, catalog, health, AppState},
    core::{
        error::CoreError, middleware::request_logging_middleware, session::session_middleware,
    },
    Config,
};

/// 组装全部路由
///
/// 首页和购物车接口挂载会话中间件；健康检查和商品 JSON 不创建会话。
pub fn build_router(state: AppState, timeout: Duration) -> Router {
    let storefront = Router::new()
        .route("/", get(catalog::handler::index))
        .route("/get_cart", get(cart::handler::get_cart))
        .route("/add_to_cart", post(cart::handler::add_to_cart))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .merge(storefront)
        .route("/health", get(health::health_check))
        .route("/api/products", get(catalog::handler::list_products))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("路径 {} 不存在", uri.path()))
}

/// 启动 HTTP 服务，收到 SIGINT/SIGTERM 后优雅退出
pub async fn run(config: Config) -> crate::Result<()> {
    let state = AppState::new(&config)?;
    info!(
        "✅ 已加载 {} 个商品，会话 cookie: {}",
        state.catalog.list_products().len(),
        state.session_cookie.name()
    );

    let app = build_router(state, Duration::from_secs(config.http.timeout_seconds));

    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!("🚀 ShopEasy 运行在 http://{}", listener.local_addr()?);
    info!("📖 可用的路由:");
    info!("   GET  /             - 商品列表页");
    info!("   GET  /health       - 健康检查");
    info!("   GET  /get_cart     - 当前会话的购物车");
    info!("   POST /add_to_cart  - 加入购物车");
    info!("   GET  /api/products - 商品目录 JSON");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("收到退出信号，开始关闭服务");
}
