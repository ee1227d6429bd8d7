pub mod app_config;
pub mod database;

pub use app_config::StoreConfig;
pub use database::{Database, GrowthPolicy};
pub use mercato_catalog::{Company, CompanyListing, ProductEntry, ProductListing};
pub use mercato_core::{
    NoopObserver, StoreError, StoreEvent, StoreObserver, StoreResult, TracingObserver,
};
