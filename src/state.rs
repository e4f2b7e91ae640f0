//! Shared application state for all routes.

use crate::store::TicketStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected at startup; tests hand in an in-memory store.
    pub store: Arc<dyn TicketStore>,
}

impl AppState {
    pub fn new<S>(store: S) -> Self
    where
        S: TicketStore + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }
}
