//! 会话识别
//!
//! 会话 ID 由 cookie 携带。请求没有合法的会话 cookie 时生成新 ID，
//! 并在响应中下发 `Set-Cookie`。

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::{fmt, sync::Arc};
use tracing::{debug, warn};
use uuid::Uuid;

/// 会话 ID (UUID v4 文本)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// 解析 cookie 中的会话 ID，格式不合法时返回 `None`
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// 会话 cookie 的名称
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: Arc<str>,
}

impl SessionCookie {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 从请求头中找出会话 ID
    pub fn extract(&self, headers: &HeaderMap) -> Option<SessionId> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| *key == &*self.name)
            .and_then(|(_, value)| SessionId::parse(value))
    }

    pub fn set_cookie_header(&self, id: &SessionId) -> String {
        format!("{}={}; Path=/; HttpOnly; SameSite=Lax", self.name, id)
    }
}

/// 会话中间件: 把 [`SessionId`] 放入请求扩展，新会话在响应里写回 cookie
pub async fn session_middleware(
    State(cookie): State<SessionCookie>,
    mut req: Request,
    next: Next,
) -> Response {
    let (session_id, is_new) = match cookie.extract(req.headers()) {
        Some(id) => (id, false),
        None => {
            let id = SessionId::generate();
            debug!("创建新会话: {}", id);
            (id, true)
        }
    };

    req.extensions_mut().insert(session_id.clone());
    let mut response = next.run(req).await;

    if is_new {
        match HeaderValue::from_str(&cookie.set_cookie_header(&session_id)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("无法写入会话 cookie: {}", e),
        }
    }

    response
}
