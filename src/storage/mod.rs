//! Storage backends

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::{InMemoryStore, StoredRecord, Tables};
#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;

use crate::core::{DataService, StoreError};
use crate::entities::User;

/// Insert configured users, refreshing the ones that already exist
///
/// Users are matched by username, so re-seeding a persistent backend keeps
/// their ids. Returns the stored users in the order given.
pub async fn seed_users(
    service: &dyn DataService<User>,
    users: Vec<User>,
) -> Result<Vec<User>, StoreError> {
    let existing = service.list().await?;
    let mut seeded = Vec::with_capacity(users.len());

    for mut user in users {
        let stored = match existing.iter().find(|u| u.username == user.username) {
            Some(current) => {
                user.id = current.id;
                user.date_joined = current.date_joined;
                service.update(&current.id, user).await?
            }
            None => service.create(user).await?,
        };
        tracing::debug!(username = %stored.username, id = %stored.id, "user seeded");
        seeded.push(stored);
    }

    Ok(seeded)
}
