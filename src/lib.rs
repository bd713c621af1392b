//! # ShopEasy 演示商城
//!
//! 基于 Axum 的极简在线商城：
//! - 商品列表页面 (`GET /`)
//! - 健康检查 (`GET /health`)
//! - 基于会话的购物车 (`GET /get_cart`, `POST /add_to_cart`)
//!
//! 分层结构沿用 app / core / infrastructure 三层。

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use app::AppState;
pub use infrastructure::config::{Config, ConfigError};

/// 服务启动阶段的错误类型
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    #[error("模板加载失败: {0}")]
    Template(#[from] minijinja::Error),
    #[error("网络错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
