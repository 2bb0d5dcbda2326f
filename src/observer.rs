//! Observers for best-effort side effects
//!
//! Persisting a Q&A pair happens after the answer already exists, so a storage
//! failure is reported here instead of failing the request.

use tracing::{debug, error};

use crate::store::StoreError;

/// Receives the outcome of best-effort persistence
pub trait PersistenceObserver: Send + Sync {
    /// A record was stored with the given id
    fn record_saved(&self, _id: i64) {}

    /// Storing a record failed and the record was dropped
    fn record_dropped(&self, question: &str, error: &StoreError);
}

/// Default observer: logs drops through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PersistenceObserver for TracingObserver {
    fn record_saved(&self, id: i64) {
        debug!(id, "Stored Q&A record");
    }

    fn record_dropped(&self, question: &str, error: &StoreError) {
        error!(%error, question, "Database insert error; record dropped");
    }
}
