//! 基础设施层: 配置、日志、模板

pub mod config;
pub mod logger;
pub mod templates;
