use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Champion, ChampionId, NewUser, PreferenceSet, User};

use super::Store;

/// In-memory store backed by locked maps.
///
/// Used by the integration tests and handy for running the API without a
/// database; behavior matches [`super::PgStore`] for every trait method.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    champions: BTreeMap<ChampionId, Champion>,
    users: HashMap<Uuid, User>,
    preferences: HashMap<Uuid, PreferenceSet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a champion into the catalog.
    pub async fn add_champion(&self, champion: Champion) {
        let mut inner = self.inner.write().await;
        inner.champions.insert(champion.id, champion);
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_champions(&self) -> AppResult<Vec<Champion>> {
        let inner = self.inner.read().await;
        Ok(inner.champions.values().cloned().collect())
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.email == new_user.email) {
            return Err(AppError::Conflict("Email already in use".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.id, user.clone());
        inner.preferences.insert(user.id, PreferenceSet::new());

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&user_id).cloned())
    }

    async fn load_preferences(&self, user_id: Uuid) -> AppResult<Option<PreferenceSet>> {
        let inner = self.inner.read().await;
        if !inner.users.contains_key(&user_id) {
            return Ok(None);
        }
        Ok(Some(inner.preferences.get(&user_id).cloned().unwrap_or_default()))
    }

    async fn load_other_preferences(
        &self,
        exclude: Uuid,
    ) -> AppResult<Vec<(Uuid, PreferenceSet)>> {
        let inner = self.inner.read().await;
        let mut population: Vec<(Uuid, PreferenceSet)> = inner
            .users
            .keys()
            .filter(|id| **id != exclude)
            .map(|id| (*id, inner.preferences.get(id).cloned().unwrap_or_default()))
            .collect();
        population.sort_by_key(|(id, _)| *id);

        Ok(population)
    }

    async fn save_preferences(
        &self,
        user_id: Uuid,
        preferences: &PreferenceSet,
    ) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.preferences.insert(user_id, preferences.clone());
        Ok(())
    }
}
