use std::sync::Arc;

use mercato_catalog::{Company, CompanyListing, ProductListing};
use mercato_core::{NoopObserver, StoreError, StoreEvent, StoreObserver, StoreResult};
use serde::{Deserialize, Serialize};

use crate::app_config::StoreConfig;

/// How many slots an insert adds when every slot is in use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// One extra slot per growth
    #[default]
    ByOne,
    /// Twice the current slots, at least one
    Doubling,
}

impl GrowthPolicy {
    pub fn next_capacity(self, current: usize) -> usize {
        match self {
            GrowthPolicy::ByOne => current + 1,
            GrowthPolicy::Doubling => current.saturating_mul(2).max(1),
        }
    }
}

/// Ordered store of companies keyed by unique name.
///
/// Slots are tracked explicitly: `capacity()` only changes through
/// [`Database::reserve`] or when an insert finds every slot in use.
/// Lookups are linear scans over the live companies.
#[derive(Debug)]
pub struct Database {
    companies: Vec<Company>,
    capacity: usize,
    growth: GrowthPolicy,
    observer: Arc<dyn StoreObserver>,
}

impl Database {
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_observer(initial_capacity, Arc::new(NoopObserver))
    }

    pub fn with_observer(initial_capacity: usize, observer: Arc<dyn StoreObserver>) -> Self {
        Self {
            companies: Vec::with_capacity(initial_capacity),
            capacity: initial_capacity,
            growth: GrowthPolicy::default(),
            observer,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.initial_capacity).with_growth(config.growth)
    }

    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Number of live companies
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    pub fn companies(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn company(&self, name: &str) -> Option<&Company> {
        self.search_company(name).map(|pos| &self.companies[pos])
    }

    /// Resize storage to `new_capacity` slots, never below the live count.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity == self.capacity {
            return;
        }

        let used = self.companies.len();
        let target = new_capacity.max(used);

        let from = self.capacity;
        self.resize(target);
        self.emit(StoreEvent::Reserved {
            from,
            requested: new_capacity,
            to: target,
        });
    }

    /// Append a new company with no products.
    ///
    /// Panics if `name` is empty.
    pub fn insert_company(&mut self, name: &str) -> StoreResult<()> {
        assert!(!name.is_empty(), "company name must not be empty");

        if self.search_company(name).is_some() {
            return Err(StoreError::CompanyExists(name.to_string()));
        }

        if self.companies.len() == self.capacity {
            let from = self.capacity;
            let to = self.growth.next_capacity(from);
            self.resize(to);
            self.emit(StoreEvent::Grown { from, to });
        }

        let index = self.companies.len();
        self.companies.push(Company::new(name));
        self.emit(StoreEvent::CompanyInserted {
            company: name.to_string(),
            index,
        });
        Ok(())
    }

    /// Add a product to an existing company.
    ///
    /// `Ok(false)` means the company exists but already lists the product.
    pub fn insert_item(&mut self, company: &str, product: &str, price: f64) -> StoreResult<bool> {
        assert!(
            !company.is_empty() && !product.is_empty(),
            "company and product names must not be empty"
        );
        assert!(
            price.is_finite() && price >= 0.0,
            "product price must be a non-negative amount, got {price}"
        );

        let pos = self.company_index(company)?;
        let event = match self.companies[pos].insert(product, price) {
            Ok(()) => StoreEvent::ItemInserted {
                company: company.to_string(),
                product: product.to_string(),
                price,
            },
            Err(err) => StoreEvent::ItemRejected {
                company: company.to_string(),
                product: product.to_string(),
                reason: err.to_string(),
            },
        };

        let inserted = matches!(event, StoreEvent::ItemInserted { .. });
        self.emit(event);
        Ok(inserted)
    }

    /// Remove a company, shifting later companies one slot left.
    pub fn erase_company(&mut self, name: &str) -> StoreResult<()> {
        let index = self.company_index(name)?;
        self.companies.remove(index);
        self.emit(StoreEvent::CompanyErased {
            company: name.to_string(),
            index,
        });
        Ok(())
    }

    /// Remove a product from an existing company.
    ///
    /// `Ok(false)` means the company exists but does not list the product.
    pub fn erase_item(&mut self, company: &str, product: &str) -> StoreResult<bool> {
        assert!(
            !company.is_empty() && !product.is_empty(),
            "company and product names must not be empty"
        );

        let pos = self.company_index(company)?;
        let event = match self.companies[pos].erase(product) {
            Ok(_) => StoreEvent::ItemErased {
                company: company.to_string(),
                product: product.to_string(),
            },
            Err(err) => StoreEvent::ItemRejected {
                company: company.to_string(),
                product: product.to_string(),
                reason: err.to_string(),
            },
        };

        let erased = matches!(event, StoreEvent::ItemErased { .. });
        self.emit(event);
        Ok(erased)
    }

    /// Position of the named company, `None` when absent.
    ///
    /// Panics if `name` is empty.
    pub fn search_company(&self, name: &str) -> Option<usize> {
        assert!(!name.is_empty(), "company name must not be empty");
        self.companies.iter().position(|c| c.name() == name)
    }

    pub fn items_by_company(&self, name: &str) -> StoreResult<ProductListing> {
        let pos = self.company_index(name)?;
        Ok(self.companies[pos].listing())
    }

    pub fn companies_listing(&self) -> CompanyListing {
        CompanyListing {
            companies: self.companies.iter().map(|c| c.name().to_string()).collect(),
        }
    }

    fn company_index(&self, name: &str) -> StoreResult<usize> {
        self.search_company(name)
            .ok_or_else(|| StoreError::CompanyNotFound(name.to_string()))
    }

    fn resize(&mut self, target: usize) {
        let used = self.companies.len();
        if target > self.capacity {
            self.companies.reserve_exact(target - used);
        } else {
            self.companies.shrink_to(target);
        }
        self.capacity = target;
    }

    fn emit(&self, event: StoreEvent) {
        self.observer.on_event(&event);
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        let mut companies = Vec::with_capacity(self.capacity);
        companies.extend(self.companies.iter().cloned());

        self.emit(StoreEvent::Cloned {
            companies: companies.len(),
            capacity: self.capacity,
        });

        Self {
            companies,
            capacity: self.capacity,
            growth: self.growth,
            observer: Arc::clone(&self.observer),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new(0)
    }
}
