//! Immutable in-memory catalog store
//!
//! The store is constructed once at boot and passed explicitly to the
//! query engine; there is no process-wide global. Read operations hand
//! out references or derived vectors. Nothing reorders the canonical
//! load order across requests.

use std::path::Path;

use super::errors::CatalogResult;
use super::loader::CatalogLoader;
use super::types::Item;

/// The loaded item collection, held for the process lifetime.
#[derive(Debug)]
pub struct CatalogStore {
    items: Vec<Item>,
}

impl CatalogStore {
    /// Wraps an already-decoded collection.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Loads the collection from a catalog file.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        CatalogLoader::new(path.as_ref()).load().map(Self::new)
    }

    /// All items in canonical load order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of loaded items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Linear scan for the first item with the given id.
    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: u64, title: &str) -> Item {
        serde_json::from_value(json!({"id": id, "title": title, "price": 10.0})).unwrap()
    }

    #[test]
    fn test_get_by_id() {
        let store = CatalogStore::new(vec![item(1, "A"), item(2, "B")]);

        assert_eq!(store.get(2).unwrap().title, "B");
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_items_keep_load_order() {
        let store = CatalogStore::new(vec![item(3, "C"), item(1, "A"), item(2, "B")]);

        let ids: Vec<u64> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
