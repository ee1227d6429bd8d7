pub mod observer;

pub use observer::{NoopObserver, StoreEvent, StoreObserver, TracingObserver};

/// Company-level failures reported by the store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Company already exists: {0}")]
    CompanyExists(String),
    #[error("Company not found: {0}")]
    CompanyNotFound(String),
}

/// Product-level failures reported by a single company
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Product {product} already listed by {company}")]
    DuplicateProduct {
        company: String,
        product: String,
    },
    #[error("Product {product} not listed by {company}")]
    ProductNotFound {
        company: String,
        product: String,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::CompanyNotFound("Globex".to_string());
        assert_eq!(err.to_string(), "Company not found: Globex");

        let err = CatalogError::DuplicateProduct {
            company: "Acme".to_string(),
            product: "Widget".to_string(),
        };
        assert_eq!(err.to_string(), "Product Widget already listed by Acme");
    }
}
