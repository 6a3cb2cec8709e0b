//! In-memory product catalog.
//!
//! The catalog is fixed at startup. Search is a case-insensitive substring
//! match on the product name; the empty query matches everything.

use mercadito_core::{Price, Product, ProductId};

/// The shop's product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            product(1, "Laptop", 999_99, 10),
            product(2, "Smartphone", 499_99, 15),
            product(3, "Headphones", 99_99, 20),
            product(4, "Tablet", 299_99, 8),
        ])
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose name contains the query, case-insensitively, in
    /// catalog order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

fn product(id: i32, name: &str, price_cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::from_cents(price_cents),
        stock,
    }
}
