//! In-memory todo store implementation.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{Item, StoreError, StoreResult, TodoStore};

#[derive(Debug, Default)]
struct MemoryState {
    items: Vec<Item>,
    next_id: u64,
}

/// In-memory todo store. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    state: Mutex<MemoryState>,
}

impl MemoryTodoStore {
    /// Creates a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let state = self.lock()?;
        Ok(state.items.clone())
    }

    async fn add(&self, title: &str) -> StoreResult<()> {
        let mut state = self.lock()?;
        state.next_id += 1;
        let item = Item::new(state.next_id.to_string(), title);
        tracing::debug!(item_id = %item.id, "Added item to memory store");
        state.items.push(item);
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut state = self.lock()?;
        if let Some(pos) = state.items.iter().position(|item| item.id == id) {
            state.items.remove(pos);
            tracing::debug!(item_id = %id, "Removed item from memory store");
        }
        Ok(())
    }
}
