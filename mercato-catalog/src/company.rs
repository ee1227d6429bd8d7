use chrono::{DateTime, Utc};
use mercato_core::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::ProductListing;

/// A named, priced product offered by one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub price: f64,
}

/// A company and the products it lists, in insertion order.
///
/// Product names are unique within one company. The same product name may
/// appear under any number of companies independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
    id: Uuid,
    name: String,
    products: Vec<ProductEntry>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Company {
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "company name must not be empty");

        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            products: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> impl Iterator<Item = &ProductEntry> {
        self.products.iter()
    }

    /// Price of a listed product
    pub fn price_of(&self, product: &str) -> Option<f64> {
        self.position(product).map(|pos| self.products[pos].price)
    }

    /// Append a product to the end of the list.
    ///
    /// A product name already listed is rejected and its price left as is.
    /// Panics on an empty product name or a negative / non-finite price.
    pub fn insert(&mut self, product: &str, price: f64) -> CatalogResult<()> {
        assert!(!product.is_empty(), "product name must not be empty");
        assert!(
            price.is_finite() && price >= 0.0,
            "product price must be a non-negative amount, got {price}"
        );

        if self.position(product).is_some() {
            return Err(CatalogError::DuplicateProduct {
                company: self.name.clone(),
                product: product.to_string(),
            });
        }

        self.products.push(ProductEntry {
            name: product.to_string(),
            price,
        });
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Remove a product, keeping the order of the remaining ones
    pub fn erase(&mut self, product: &str) -> CatalogResult<ProductEntry> {
        assert!(!product.is_empty(), "product name must not be empty");

        let pos = self.position(product).ok_or_else(|| CatalogError::ProductNotFound {
            company: self.name.clone(),
            product: product.to_string(),
        })?;

        let removed = self.products.remove(pos);
        self.updated_at = Utc::now();
        Ok(removed)
    }

    /// Snapshot of the product list for reporting
    pub fn listing(&self) -> ProductListing {
        ProductListing {
            company: self.name.clone(),
            products: self.products.clone(),
        }
    }

    fn position(&self, product: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_lifecycle() {
        let mut company = Company::new("Acme");
        assert!(company.is_empty());

        company.insert("Widget", 9.99).unwrap();
        company.insert("Gadget", 5.0).unwrap();
        assert_eq!(company.len(), 2);
        assert_eq!(company.price_of("Widget"), Some(9.99));

        let removed = company.erase("Widget").unwrap();
        assert_eq!(removed.name, "Widget");
        assert_eq!(company.price_of("Widget"), None);

        let names: Vec<&str> = company.products().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Gadget"]);
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let mut company = Company::new("Acme");
        company.insert("Widget", 9.99).unwrap();

        let result = company.insert("Widget", 1.0);
        assert_eq!(
            result,
            Err(CatalogError::DuplicateProduct {
                company: "Acme".to_string(),
                product: "Widget".to_string(),
            })
        );
        // Original price is kept
        assert_eq!(company.price_of("Widget"), Some(9.99));
        assert_eq!(company.len(), 1);
    }

    #[test]
    fn test_erase_missing_product() {
        let mut company = Company::new("Acme");
        let result = company.erase("Widget");
        assert!(matches!(result, Err(CatalogError::ProductNotFound { .. })));
    }

    #[test]
    fn test_erase_preserves_order() {
        let mut company = Company::new("Acme");
        for (name, price) in [("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)] {
            company.insert(name, price).unwrap();
        }

        company.erase("b").unwrap();

        let names: Vec<&str> = company.products().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_updated_at_moves_on_change() {
        let mut company = Company::new("Acme");
        let created = company.created_at();

        company.insert("Widget", 0.0).unwrap();
        assert!(company.updated_at() >= created);
    }

    #[test]
    #[should_panic(expected = "company name must not be empty")]
    fn test_empty_company_name_panics() {
        Company::new("");
    }

    #[test]
    #[should_panic(expected = "product name must not be empty")]
    fn test_empty_product_name_panics() {
        let mut company = Company::new("Acme");
        let _ = company.insert("", 1.0);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_negative_price_panics() {
        let mut company = Company::new("Acme");
        let _ = company.insert("Widget", -1.0);
    }
}
