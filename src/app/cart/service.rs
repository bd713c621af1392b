//! 购物车业务服务

use std::sync::Arc;
use tracing::{debug, info};

use super::{
    model::{Cart, CartLine},
    store::SessionStore,
};
use crate::{app::catalog::Catalog, core::session::SessionId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CartError {
    #[error("商品 {0} 不存在")]
    UnknownProduct(u32),
}

#[derive(Clone)]
pub struct CartService {
    catalog: Arc<Catalog>,
    store: Arc<dyn SessionStore>,
}

impl CartService {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn SessionStore>) -> Self {
        Self { catalog, store }
    }

    /// 会话还没有购物车时创建一个空的，已有的保持不变
    pub fn init_session(&self, session: &SessionId) {
        if self.store.get(session).is_none() {
            debug!(%session, "初始化空购物车");
            self.store.put(session, Cart::new());
        }
    }

    /// 当前会话的购物车，未初始化时为空
    pub fn get_cart(&self, session: &SessionId) -> Cart {
        self.store.get(session).unwrap_or_default()
    }

    /// 在购物车末尾追加一行并返回更新后的购物车；商品不存在时购物车保持不变
    pub fn add_to_cart(&self, session: &SessionId, product_id: u32) -> Result<Cart, CartError> {
        let product = self
            .catalog
            .find(product_id)
            .ok_or(CartError::UnknownProduct(product_id))?;

        let mut cart = self.get_cart(session);
        cart.push(CartLine::from(product));
        self.store.put(session, cart.clone());

        info!(%session, product_id, cart_len = cart.len(), "商品已加入购物车");
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::cart::store::MemorySessionStore;

    fn service() -> CartService {
        CartService::new(
            Arc::new(Catalog::seeded()),
            Arc::new(MemorySessionStore::new()),
        )
    }

    #[test]
    fn test_fresh_session_has_empty_cart() {
        let svc = service();
        let session = SessionId::generate();
        assert!(svc.get_cart(&session).is_empty());

        svc.init_session(&session);
        assert!(svc.get_cart(&session).is_empty());
    }

    #[test]
    fn test_add_every_catalog_product() {
        let svc = service();
        let session = SessionId::generate();
        let ids: Vec<u32> = Catalog::seeded().list_products().iter().map(|p| p.id).collect();

        for (n, id) in ids.iter().enumerate() {
            let before = svc.get_cart(&session).len();
            let cart = svc.add_to_cart(&session, *id).unwrap();
            assert_eq!(cart.len(), before + 1);
            assert_eq!(cart.last().map(|l| l.id), Some(*id));
            assert_eq!(svc.get_cart(&session).len(), n + 1);
        }
    }

    #[test]
    fn test_add_copies_name_and_price() {
        let svc = service();
        let session = SessionId::generate();
        let cart = svc.add_to_cart(&session, 1).unwrap();
        assert_eq!(
            cart,
            vec![CartLine {
                id: 1,
                name: "Wireless Headphones".to_string(),
                price: 79.99,
            }]
        );
    }

    #[test]
    fn test_unknown_product_leaves_cart_unchanged() {
        let svc = service();
        let session = SessionId::generate();
        svc.add_to_cart(&session, 2).unwrap();
        let before = svc.get_cart(&session);

        assert_eq!(
            svc.add_to_cart(&session, 999),
            Err(CartError::UnknownProduct(999))
        );
        assert_eq!(svc.get_cart(&session), before);
    }

    #[test]
    fn test_duplicate_adds_are_separate_lines() {
        let svc = service();
        let session = SessionId::generate();
        svc.add_to_cart(&session, 4).unwrap();
        let cart = svc.add_to_cart(&session, 4).unwrap();
        assert_eq!(cart.len(), 2);
        assert!(cart.iter().all(|l| l.id == 4));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let svc = service();
        let alice = SessionId::generate();
        let bob = SessionId::generate();

        svc.add_to_cart(&alice, 1).unwrap();
        svc.init_session(&bob);

        assert_eq!(svc.get_cart(&alice).len(), 1);
        assert!(svc.get_cart(&bob).is_empty());
    }

    #[test]
    fn test_init_does_not_reset_existing_cart() {
        let svc = service();
        let session = SessionId::generate();
        svc.add_to_cart(&session, 5).unwrap();
        svc.init_session(&session);
        assert_eq!(svc.get_cart(&session).len(), 1);
    }
}
