//! 商品目录
//!
//! 启动时构建一次，之后只读，所有请求共享同一份数据。

use super::model::Product;

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// 商城内置的商品
    pub fn seeded() -> Self {
        let product = |id, name: &str, price, category: &str, description: &str, rating| Product {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
            description: description.to_string(),
            rating,
        };

        Self::new(vec![
            product(
                1,
                "Wireless Headphones",
                79.99,
                "Electronics",
                "Noise-cancelling over-ear headphones with 30-hour battery life.",
                4.5,
            ),
            product(
                2,
                "Smart Watch",
                199.99,
                "Electronics",
                "Fitness tracking, heart-rate monitor and notifications on your wrist.",
                4.3,
            ),
            product(
                3,
                "Running Shoes",
                89.99,
                "Sports",
                "Lightweight cushioned shoes built for daily training.",
                4.7,
            ),
            product(
                4,
                "Coffee Maker",
                49.99,
                "Home",
                "12-cup programmable drip coffee maker with keep-warm plate.",
                4.2,
            ),
            product(
                5,
                "Backpack",
                39.99,
                "Accessories",
                "Water-resistant everyday backpack with padded laptop sleeve.",
                4.4,
            ),
            product(
                6,
                "Desk Lamp",
                29.99,
                "Home",
                "Dimmable LED desk lamp with adjustable arm and USB charging port.",
                4.1,
            ),
        ])
    }

    /// 全部商品，顺序固定
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_products_exist() {
        assert!(!Catalog::seeded().list_products().is_empty());
    }

    #[test]
    fn test_product_fields_populated() {
        for product in Catalog::seeded().list_products() {
            assert!(product.id > 0);
            assert!(!product.name.is_empty());
            assert!(product.price >= 0.0);
            assert!(!product.category.is_empty());
            assert!(!product.description.is_empty());
            assert!(product.rating > 0.0);
        }
    }

    #[test]
    fn test_product_serializes_all_fields() {
        let catalog = Catalog::seeded();
        let value = serde_json::to_value(&catalog.list_products()[0]).unwrap();
        for field in ["id", "name", "price", "category", "description", "rating"] {
            assert!(value.get(field).is_some(), "缺少字段 {field}");
        }
    }

    #[test]
    fn test_product_ids_unique() {
        let catalog = Catalog::seeded();
        let ids: HashSet<u32> = catalog.list_products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.list_products().len());
    }

    #[test]
    fn test_list_is_stable() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.list_products(), catalog.list_products());
        assert_eq!(catalog.list_products()[0].name, "Wireless Headphones");
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.find(3).map(|p| p.name.as_str()), Some("Running Shoes"));
        assert!(catalog.find(999).is_none());
        assert!(catalog.find(0).is_none());
    }
}
