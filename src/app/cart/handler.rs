//! 购物车处理器
//!
//! 商品不存在或请求体格式错误都返回 200，通过 `success: false` 表示失败。

use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    response::Json,
};
use tracing::warn;

use super::model::{AddToCartRequest, Cart, CartResponse};
use crate::{app::AppState, core::session::SessionId};

pub async fn get_cart(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<Cart> {
    Json(state.cart_service.get_cart(&session))
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    payload: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Json<CartResponse> {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            warn!(%session, "无效的加购请求: {}", rejection.body_text());
            let cart = state.cart_service.get_cart(&session);
            return Json(CartResponse::rejected(cart, "Invalid request body"));
        }
    };

    match state.cart_service.add_to_cart(&session, request.product_id) {
        Ok(cart) => Json(CartResponse::added(cart)),
        Err(e) => {
            warn!(%session, "加购失败: {}", e);
            let cart = state.cart_service.get_cart(&session);
            Json(CartResponse::rejected(cart, "Product not found"))
        }
    }
}
