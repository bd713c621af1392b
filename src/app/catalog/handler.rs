//! 商品处理器

use axum::{
    extract::{Extension, State},
    response::{Html, Json},
};
use minijinja::context;

use super::model::{Product, ProductView};
use crate::{app::AppState, core::error::CoreError, core::session::SessionId};

/// 商城首页: 渲染商品列表，并为会话准备空购物车
pub async fn index(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Html<String>, CoreError> {
    state.cart_service.init_session(&session);

    let products: Vec<ProductView<'_>> = state
        .catalog
        .list_products()
        .iter()
        .map(ProductView::from)
        .collect();

    let html = state.templates.render(
        "index.html",
        context! {
            title => "ShopEasy",
            products => products,
        },
    )?;
    Ok(Html(html))
}

/// 商品目录 JSON
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.list_products().to_vec())
}
