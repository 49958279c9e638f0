//! Application state for the payslip engine API.

use std::sync::Arc;

use crate::store::RecordStore;

/// Shared application state.
///
/// Holds the record store behind an `Arc`; nothing in the state is
/// mutable, so concurrent requests share it freely.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Creates a new application state over a record store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
