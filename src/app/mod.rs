//! 应用层: 商品目录、购物车、健康检查

pub mod cart;
pub mod catalog;
pub mod health;

use axum::extract::FromRef;
use std::sync::Arc;

use crate::{
    core::session::SessionCookie, infrastructure::templates::Templates, Config,
};
use cart::{CartService, MemorySessionStore, SessionStore};
use catalog::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cart_service: CartService,
    pub templates: Arc<Templates>,
    pub session_cookie: SessionCookie,
}

impl AppState {
    /// 使用内置商品目录和进程内会话存储
    pub fn new(config: &Config) -> crate::Result<Self> {
        Self::with_store(config, Arc::new(MemorySessionStore::new()))
    }

    pub fn with_store(config: &Config, store: Arc<dyn SessionStore>) -> crate::Result<Self> {
        let catalog = Arc::new(Catalog::seeded());
        Ok(Self {
            cart_service: CartService::new(catalog.clone(), store),
            catalog,
            templates: Arc::new(Templates::load()?),
            session_cookie: SessionCookie::new(config.session.cookie_name.as_str()),
        })
    }
}

impl FromRef<AppState> for SessionCookie {
    fn from_ref(state: &AppState) -> Self {
        state.session_cookie.clone()
    }
}
