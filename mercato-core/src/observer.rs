use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Something that happened inside the store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreEvent {
    CompanyInserted { company: String, index: usize },
    CompanyErased { company: String, index: usize },
    ItemInserted { company: String, product: String, price: f64 },
    ItemErased { company: String, product: String },
    /// The company was found but refused the product operation
    ItemRejected { company: String, product: String, reason: String },
    /// `to` differs from `requested` when the request was below the live count
    Reserved { from: usize, requested: usize, to: usize },
    /// Automatic growth triggered by an insert at full capacity
    Grown { from: usize, to: usize },
    Cloned { companies: usize, capacity: usize },
}

/// Receives store events. Injected into the store so that callers decide
/// whether and where events are recorded.
pub trait StoreObserver: Send + Sync + fmt::Debug {
    fn on_event(&self, event: &StoreEvent);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StoreObserver for NoopObserver {
    fn on_event(&self, _event: &StoreEvent) {}
}

/// Forwards events to `tracing` at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl StoreObserver for TracingObserver {
    fn on_event(&self, event: &StoreEvent) {
        match event {
            StoreEvent::CompanyInserted { company, index } => {
                debug!(company = %company, index, "Insert company...");
            }
            StoreEvent::CompanyErased { company, index } => {
                debug!(company = %company, index, "Erase company...");
            }
            StoreEvent::ItemInserted { company, product, price } => {
                debug!(company = %company, product = %product, price, "Insert item...");
            }
            StoreEvent::ItemErased { company, product } => {
                debug!(company = %company, product = %product, "Erase item...");
            }
            StoreEvent::ItemRejected { company, product, reason } => {
                debug!(company = %company, product = %product, reason = %reason, "Item rejected by company");
            }
            StoreEvent::Reserved { from, requested, to } => {
                if requested != to {
                    debug!(requested, used = to, "Reserve clamped to used slots");
                }
                debug!(from, to, "Reserve...");
            }
            StoreEvent::Grown { from, to } => {
                debug!(from, to, "Grow...");
            }
            StoreEvent::Cloned { companies, capacity } => {
                debug!(companies, capacity, "Copy...");
            }
        }
    }
}
