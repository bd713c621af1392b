//! 会话购物车存储
//!
//! 没有过期或清理操作，购物车随进程存在。

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use super::model::Cart;
use crate::core::session::SessionId;

/// 按会话 ID 存取购物车的键值存储
pub trait SessionStore: Send + Sync {
    fn get(&self, id: &SessionId) -> Option<Cart>;
    fn put(&self, id: &SessionId, cart: Cart);
}

/// 进程内的会话存储
#[derive(Default)]
pub struct MemorySessionStore {
    carts: RwLock<HashMap<SessionId, Cart>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.carts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, id: &SessionId) -> Option<Cart> {
        self.carts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn put(&self, id: &SessionId, cart: Cart) {
        self.carts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), cart);
    }
}
