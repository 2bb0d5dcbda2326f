// Handlers module

pub mod analytics;
pub mod ask;
pub mod error;

use std::sync::Arc;

use crate::observer::{PersistenceObserver, TracingObserver};
use crate::store::FaqStore;
use crate::upstream::ChatCompletion;

pub use analytics::{analytics, analytics_handler};
pub use ask::{ask, ask_handler};
pub use error::{handle_rejection, ApiError};

/// Collaborators shared by every request
///
/// Immutable; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn ChatCompletion>,
    pub store: FaqStore,
    pub observer: Arc<dyn PersistenceObserver>,
}

impl AppState {
    /// State with the default tracing observer
    pub fn new(upstream: Arc<dyn ChatCompletion>, store: FaqStore) -> Self {
        Self {
            upstream,
            store,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the persistence observer
    pub fn with_observer(mut self, observer: Arc<dyn PersistenceObserver>) -> Self {
        self.observer = observer;
        self
    }
}
