use tracing::info;

use crate::error::{Error, Result};
use crate::models::{MenuItem, NewMenuItem};
use crate::store::{keys, Store};

const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?auto=format&fit=crop&w=1500&q=80";

pub fn list(store: &Store) -> Result<Vec<MenuItem>> {
    store.collection(keys::MENU_ITEMS)
}

/// Adds a menu item with a store-assigned id. Name and description must be
/// non-blank and the price positive; a missing image falls back to a stock
/// photo.
pub fn add(store: &Store, new: NewMenuItem) -> Result<MenuItem> {
    if new.name.trim().is_empty() || new.description.trim().is_empty() {
        return Err(Error::validation("please fill in all required fields"));
    }
    if new.price <= 0.0 {
        return Err(Error::validation("please enter a valid price"));
    }

    let image = match new.image {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_IMAGE.to_string(),
    };

    let item = MenuItem {
        id: store.next_id()?,
        name: new.name,
        description: new.description,
        price: new.price,
        category: new.category,
        image,
    };

    let mut items: Vec<MenuItem> = store.collection(keys::MENU_ITEMS)?;
    items.push(item.clone());
    store.put_collection(keys::MENU_ITEMS, &items)?;

    info!(id = %item.id, name = %item.name, "menu item added");
    Ok(item)
}

/// Removes the item with `id`; no-op if absent.
pub fn remove(store: &Store, id: &str) -> Result<()> {
    let mut items: Vec<MenuItem> = store.collection(keys::MENU_ITEMS)?;
    items.retain(|i| i.id != id);
    store.put_collection(keys::MENU_ITEMS, &items)?;
    Ok(())
}

pub fn find(store: &Store, id: &str) -> Result<Option<MenuItem>> {
    let items: Vec<MenuItem> = store.collection(keys::MENU_ITEMS)?;
    Ok(items.into_iter().find(|i| i.id == id))
}

/// Items filtered by category; an empty filter returns everything.
pub fn by_category(store: &Store, category: &str) -> Result<Vec<MenuItem>> {
    let items: Vec<MenuItem> = store.collection(keys::MENU_ITEMS)?;
    if category.is_empty() {
        return Ok(items);
    }
    Ok(items.into_iter().filter(|i| i.category == category).collect())
}
