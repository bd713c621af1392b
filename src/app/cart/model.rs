//! 购物车数据模型

use serde::{Deserialize, Serialize};

use crate::app::catalog::model::Product;

/// 购物车中的一行，名称和价格在加入时从商品复制
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// 按加入顺序排列，同一商品重复加入时各占一行
pub type Cart = Vec<CartLine>;

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: u32,
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub success: bool,
    pub cart: Cart,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CartResponse {
    pub fn added(cart: Cart) -> Self {
        Self {
            success: true,
            cart,
            message: None,
        }
    }

    pub fn rejected(cart: Cart, message: impl Into<String>) -> Self {
        Self {
            success: false,
            cart,
            message: Some(message.into()),
        }
    }
}
