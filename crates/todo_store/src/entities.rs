//! Entity types for the todo store

/// A single todo entry.
///
/// Items are immutable once stored; the only lifecycle events are creation
/// through [`TodoStore::add`](crate::TodoStore::add) and removal through
/// [`TodoStore::delete`](crate::TodoStore::delete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Backend-allocated identifier, a decimal integer rendered as a string
    pub id: String,
    /// Non-empty title
    pub title: String,
}

impl Item {
    /// Creates an item from its parts
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new() {
        let item = Item::new("1", String::from("Buy milk"));

        assert_eq!(item.id, "1");
        assert_eq!(item.title, "Buy milk");
        assert_eq!(item.clone(), item);
    }
}
