pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::{create_pool, PgStore};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Champion, NewUser, PreferenceSet, User};

/// Data-access boundary between the HTTP layer and storage.
///
/// The engine only ever sees immutable snapshots loaded through this trait;
/// it never re-queries or writes. Handlers hold an `Arc<dyn Store>` so tests
/// can swap Postgres for the in-memory implementation.
#[async_trait]
pub trait Store: Send + Sync {
    /// Full catalog snapshot, ordered by champion id.
    async fn list_champions(&self) -> AppResult<Vec<Champion>>;

    /// Creates a user. Fails with `Conflict` when the email is taken.
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>>;

    /// The user's preference set, or `None` when the user does not exist.
    /// An existing user with no saved preferences yields an empty set.
    async fn load_preferences(&self, user_id: Uuid) -> AppResult<Option<PreferenceSet>>;

    /// Preference sets of every user except `exclude`, ordered by user id.
    async fn load_other_preferences(
        &self,
        exclude: Uuid,
    ) -> AppResult<Vec<(Uuid, PreferenceSet)>>;

    /// Replaces the user's preference set wholesale. Callers validate both
    /// the user and the champion ids before this runs.
    async fn save_preferences(
        &self,
        user_id: Uuid,
        preferences: &PreferenceSet,
    ) -> AppResult<()>;
}
