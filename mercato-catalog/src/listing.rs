use serde::{Deserialize, Serialize};
use std::fmt;

use crate::company::ProductEntry;

/// Company names in storage order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyListing {
    pub companies: Vec<String>,
}

impl CompanyListing {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for CompanyListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Company List")?;
        for name in &self.companies {
            writeln!(f, "- {}", name)?;
        }
        Ok(())
    }
}

/// Products of one company in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub company: String,
    pub products: Vec<ProductEntry>,
}

impl ProductListing {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for ProductListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Printing the products of {}:", self.company)?;
        for product in &self.products {
            writeln!(f, "- {}: {}", product.name, product.price)?;
        }
        // Blank line closes the listing
        writeln!(f)
    }
}
