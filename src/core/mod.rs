//! 核心层: 错误处理、中间件、会话识别

pub mod error;
pub mod middleware;
pub mod session;
