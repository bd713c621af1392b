//! 商品数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub rating: f64,
}

/// 商品列表页使用的展示模型，价格固定两位小数
#[derive(Debug, Serialize)]
pub struct ProductView<'a> {
    pub id: u32,
    pub name: &'a str,
    pub price: String,
    pub category: &'a str,
    pub description: &'a str,
    pub rating: f64,
}

impl<'a> From<&'a Product> for ProductView<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: product.id,
            name: &product.name,
            price: format!("{:.2}", product.price),
            category: &product.category,
            description: &product.description,
            rating: product.rating,
        }
    }
}
