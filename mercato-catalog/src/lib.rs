pub mod company;
pub mod listing;

pub use company::{Company, ProductEntry};
pub use listing::{CompanyListing, ProductListing};
pub use mercato_core::{CatalogError, CatalogResult};
