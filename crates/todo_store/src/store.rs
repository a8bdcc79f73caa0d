//! Todo store trait

use async_trait::async_trait;

use crate::{Item, StoreResult};

/// Trait for todo storage operations
///
/// Implementations must be safe to share across request handlers for the
/// lifetime of the process.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Lists all items in ascending identifier order
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Appends a new item with a freshly allocated identifier
    ///
    /// The title is not validated here; callers reject empty titles.
    async fn add(&self, title: &str) -> StoreResult<()>;

    /// Deletes the item with the given identifier
    ///
    /// Deleting an identifier that does not exist is not an error.
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
