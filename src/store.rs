use anyhow::{anyhow, Result};
use std::sync::{Mutex, MutexGuard};

use crate::models::Item;

/// In-memory item collection shared by all request handlers
///
/// Items keep insertion order. Every read and every read-modify-write runs
/// under one mutex, so id assignment and append happen atomically.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Mutex<Vec<Item>>,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    /// Store seeded with the three example items (ids 1000-1002)
    pub fn with_sample_data() -> Self {
        Self::new(vec![
            Item {
                id: 1000,
                name: "cat".to_string(),
                description: "cat is meowing".to_string(),
            },
            Item {
                id: 1001,
                name: "dog".to_string(),
                description: "dog is barking".to_string(),
            },
            Item {
                id: 1002,
                name: "bird".to_string(),
                description: "bird is singing".to_string(),
            },
        ])
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Item>>> {
        self.items
            .lock()
            .map_err(|_| anyhow!("item store lock poisoned"))
    }

    /// Copy of every item, in store order
    pub fn all(&self) -> Result<Vec<Item>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Items whose name contains `query` (case-sensitive substring match)
    pub fn search(&self, query: &str) -> Result<Vec<Item>> {
        let items = self.lock()?;
        let matches: Vec<Item> = items
            .iter()
            .filter(|item| item.name.contains(query))
            .cloned()
            .collect();

        tracing::debug!("Search for {:?} matched {} items", query, matches.len());
        Ok(matches)
    }

    /// Id the next added item will get: the id of the *last* item plus one.
    ///
    /// This is not the maximum id. Deleting the last item and adding again
    /// hands out the deleted id a second time.
    pub fn next_id(&self) -> Result<i64> {
        let items = self.lock()?;
        Self::next_id_of(&items)
    }

    fn next_id_of(items: &[Item]) -> Result<i64> {
        let last = items
            .last()
            .ok_or_else(|| anyhow!("cannot assign an id: the item store is empty"))?;
        Ok(last.id + 1)
    }

    /// Append a new item with the next id and return it
    pub fn add(&self, name: &str, description: &str) -> Result<Item> {
        let mut items = self.lock()?;
        let item = Item {
            id: Self::next_id_of(&items)?,
            name: name.to_string(),
            description: description.to_string(),
        };
        items.push(item.clone());

        tracing::info!("Added item with id: {}", item.id);
        Ok(item)
    }

    /// Remove the first item matching `predicate`, returning it
    pub fn remove_first<F>(&self, predicate: F) -> Result<Option<Item>>
    where
        F: Fn(&Item) -> bool,
    {
        let mut items = self.lock()?;
        let position = items.iter().position(predicate);
        let removed = position.map(|index| items.remove(index));

        if let Some(item) = &removed {
            tracing::info!("Removed item with id: {}", item.id);
        }
        Ok(removed)
    }
}
