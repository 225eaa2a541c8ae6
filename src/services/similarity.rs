use std::cmp::Ordering;

use uuid::Uuid;

use crate::models::PreferenceSet;

use super::SIMILAR_USER_POOL;

/// Another user scored against the target user's preference set.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarUser {
    pub user_id: Uuid,
    pub similarity: f64,
    pub preferences: PreferenceSet,
}

/// Cosine similarity between two preference sets, computed from set sizes
/// without materializing membership vectors:
///
/// ```text
/// |A ∩ B| / (sqrt(|A|) * sqrt(|B|))
/// ```
///
/// Returns 0 when either set is empty; a user with no preferences has no
/// measurable similarity to anyone.
pub fn cosine_similarity(a: &PreferenceSet, b: &PreferenceSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count() as f64;
    intersection / ((a.len() as f64).sqrt() * (b.len() as f64).sqrt())
}

/// Scores every other user against the target's preference set and returns
/// the top [`SIMILAR_USER_POOL`], ordered descending by similarity.
///
/// Ties break ascending by user id; equal scores must rank identically no
/// matter how the population was ordered on the way in.
pub fn rank_similar_users(
    target: &PreferenceSet,
    population: Vec<(Uuid, PreferenceSet)>,
) -> Vec<SimilarUser> {
    let mut ranked: Vec<SimilarUser> = population
        .into_iter()
        .map(|(user_id, preferences)| SimilarUser {
            similarity: cosine_similarity(target, &preferences),
            user_id,
            preferences,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    ranked.truncate(SIMILAR_USER_POOL);
    ranked
}
