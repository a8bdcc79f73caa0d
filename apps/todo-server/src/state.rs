//! Application state.

use std::sync::Arc;

use todo_store::{Backend, TodoStore};

use crate::template::PageTemplate;

/// Shared application state.
pub struct AppState {
    /// Todo store, fixed for the life of the process.
    pub store: Arc<dyn TodoStore>,
    /// Which backend `store` is.
    pub backend: Backend,
    /// Page template.
    pub template: PageTemplate,
}

impl AppState {
    /// Creates new application state.
    pub fn new(store: Arc<dyn TodoStore>, backend: Backend, template: PageTemplate) -> Self {
        Self {
            store,
            backend,
            template,
        }
    }
}

/// Type alias for shared state.
pub type SharedState = Arc<AppState>;

/// Creates shared state from a store and template.
pub fn create_shared_state(
    store: Arc<dyn TodoStore>,
    backend: Backend,
    template: PageTemplate,
) -> SharedState {
    Arc::new(AppState::new(store, backend, template))
}
