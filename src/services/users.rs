use tracing::info;

use crate::error::{Error, Result};
use crate::models::{NewUser, User};
use crate::store::{keys, Store};

pub fn list(store: &Store) -> Result<Vec<User>> {
    store.collection(keys::USERS)
}

/// Registers a user with a store-assigned id. Fails with `DuplicateEmail`
/// when the email already exists (exact, case-sensitive match); the stored
/// collection is left untouched on failure.
pub fn add(store: &Store, new: NewUser) -> Result<User> {
    let mut users: Vec<User> = store.collection(keys::USERS)?;

    if users.iter().any(|u| u.email == new.email) {
        return Err(Error::DuplicateEmail);
    }

    let user = User {
        id: store.next_id()?,
        name: new.name,
        email: new.email,
        password: new.password,
        role: new.role,
    };

    users.push(user.clone());
    store.put_collection(keys::USERS, &users)?;

    info!(id = %user.id, email = %user.email, "user registered");
    Ok(user)
}

/// Removes the user with `id`; no-op if absent.
pub fn remove(store: &Store, id: &str) -> Result<()> {
    let mut users: Vec<User> = store.collection(keys::USERS)?;
    users.retain(|u| u.id != id);
    store.put_collection(keys::USERS, &users)?;
    Ok(())
}

pub fn find_by_email(store: &Store, email: &str) -> Result<Option<User>> {
    let users: Vec<User> = store.collection(keys::USERS)?;
    Ok(users.into_iter().find(|u| u.email == email))
}
