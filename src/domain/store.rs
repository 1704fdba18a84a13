//! Entity store: users and items keyed by store-assigned ids

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::{Item, ItemId, User, UserId};

/// Authoritative id → entity mapping for users and items.
///
/// Ids come from per-store counters starting at 1. Since ids only grow,
/// iterating the maps yields insertion order. The store does not validate
/// names, emails or rates; its caller does.
#[derive(Debug)]
pub struct EntityStore {
    users: BTreeMap<UserId, User>,
    items: BTreeMap<ItemId, Item>,
    next_user_id: UserId,
    next_item_id: ItemId,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            items: BTreeMap::new(),
            next_user_id: 1,
            next_item_id: 1,
        }
    }

    pub fn create_user(&mut self, name: impl Into<String>, email: impl Into<String>) -> User {
        let id = self.next_user_id;
        self.next_user_id += 1;
        let user = User::new(id, name, email);
        self.users.insert(id, user.clone());
        user
    }

    pub fn create_item(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        rate_per_day: Decimal,
    ) -> Item {
        let id = self.next_item_id;
        self.next_item_id += 1;
        let item = Item::new(id, name, category, rate_per_day);
        self.items.insert(id, item.clone());
        item
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn get_item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub(crate) fn get_item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    /// All items in insertion order
    pub fn list_items(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
