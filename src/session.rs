//! Session and authorization gate: at most one current user per store,
//! persisted under the `currentUser` key.

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{NewUser, Role, User};
use crate::services::users;
use crate::store::{keys, Store};

/// Looks the user up by exact email + password match and persists the
/// session on success. No lockout or rate limiting by design.
pub fn login(store: &Store, email: &str, password: &str) -> Result<User> {
    match users::find_by_email(store, email)? {
        Some(user) if user.password == password => {
            store.put(keys::CURRENT_USER, &user)?;
            info!(email = %user.email, role = ?user.role, "login");
            Ok(user)
        }
        _ => {
            warn!(email, "failed login attempt");
            Err(Error::InvalidCredentials)
        }
    }
}

/// Creates a customer-role account and authenticates it. Fails with
/// `PasswordMismatch` before touching the store, then `DuplicateEmail`
/// via the users registry.
pub fn register(
    store: &Store,
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<User> {
    if password != confirm_password {
        return Err(Error::PasswordMismatch);
    }

    let user = users::add(
        store,
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::Customer,
        },
    )?;

    store.put(keys::CURRENT_USER, &user)?;
    Ok(user)
}

/// Clears the persisted session; harmless when already anonymous.
pub fn logout(store: &Store) -> Result<()> {
    store.delete(keys::CURRENT_USER)?;
    info!("logout");
    Ok(())
}

pub fn current_user(store: &Store) -> Result<Option<User>> {
    store.get(keys::CURRENT_USER)
}

/// Permits the operation when a user is logged in with one of `required`
/// roles. Anonymous sessions get `Unauthenticated` (route to login) and
/// wrong-role sessions get `Unauthorized` (route home), so callers can
/// send each case to a different landing page.
pub fn authorize(store: &Store, required: &[Role]) -> Result<User> {
    let user = current_user(store)?.ok_or(Error::Unauthenticated)?;
    if required.contains(&user.role) {
        Ok(user)
    } else {
        warn!(email = %user.email, role = ?user.role, "unauthorized access");
        Err(Error::Unauthorized)
    }
}
