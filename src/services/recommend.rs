use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::db::Store;
use crate::error::{AppError, AppResult};
use crate::models::{Champion, PreferenceSet};

use super::{collaborative_recommendations, content_based_recommendations, rank_similar_users};

/// The two candidate lists, presented separately to the caller.
///
/// The strategies are never merged or deduplicated against each other; the
/// frontend renders them as distinct sections. Empty lists mean "no signal
/// available" and are always present, never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub collaborative: Vec<Champion>,
    pub content_based: Vec<Champion>,
}

/// Runs both strategies over immutable snapshots of the catalog and the
/// other users' preference sets.
///
/// Pure and read-only: inputs are never mutated and no I/O happens here. An
/// empty liked set short-circuits to two empty lists without invoking either
/// scorer; that is the designed empty state, not an error.
pub fn recommend(
    liked: &PreferenceSet,
    catalog: &[Champion],
    population: Vec<(Uuid, PreferenceSet)>,
) -> Recommendations {
    if liked.is_empty() {
        return Recommendations::default();
    }

    let content_based = content_based_recommendations(liked, catalog);

    let similar_users = rank_similar_users(liked, population);
    let collaborative = collaborative_recommendations(&similar_users, liked, catalog);

    Recommendations {
        collaborative,
        content_based,
    }
}

/// Loads the target user's preference snapshot plus the catalog and
/// population, then hands everything to the pure engine.
///
/// The only failure surfaced here is an unknown user; all scoring beyond
/// that point is infallible.
pub async fn recommend_for_user(
    store: Arc<dyn Store>,
    user_id: Uuid,
) -> AppResult<Recommendations> {
    let liked = store
        .load_preferences(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if liked.is_empty() {
        tracing::debug!(%user_id, "user has no preferences, returning empty candidate lists");
        return Ok(Recommendations::default());
    }

    let catalog = store.list_champions().await?;
    let population = store.load_other_preferences(user_id).await?;

    tracing::info!(
        %user_id,
        liked = liked.len(),
        catalog_size = catalog.len(),
        population_size = population.len(),
        "computing recommendations"
    );

    Ok(recommend(&liked, &catalog, population))
}
