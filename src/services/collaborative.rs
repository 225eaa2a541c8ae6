use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Champion, ChampionId, PreferenceSet};

use super::{SimilarUser, MAX_RECOMMENDATIONS};

/// Aggregates the preferences of the top similar users into
/// similarity-weighted champion scores and resolves the winners against the
/// catalog.
///
/// Each similar user contributes their full similarity score to every
/// champion they like that the target has not; one highly-similar user's
/// endorsement outweighs several weakly-similar users' endorsements of a
/// different champion. Ranking is descending by accumulated score with ties
/// broken ascending by champion id, capped at [`MAX_RECOMMENDATIONS`].
///
/// A champion id that fails to resolve against the catalog is skipped with a
/// warning rather than failing the request; one stale record must not cost a
/// user their whole result.
pub fn collaborative_recommendations(
    similar_users: &[SimilarUser],
    liked: &PreferenceSet,
    catalog: &[Champion],
) -> Vec<Champion> {
    let mut scores: HashMap<ChampionId, f64> = HashMap::new();
    for user in similar_users {
        for &champion_id in &user.preferences {
            if !liked.contains(&champion_id) {
                *scores.entry(champion_id).or_insert(0.0) += user.similarity;
            }
        }
    }

    let mut ranked: Vec<(ChampionId, f64)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(MAX_RECOMMENDATIONS);

    let by_id: HashMap<ChampionId, &Champion> =
        catalog.iter().map(|champion| (champion.id, champion)).collect();

    ranked
        .into_iter()
        .filter_map(|(champion_id, _)| match by_id.get(&champion_id) {
            Some(champion) => Some((*champion).clone()),
            None => {
                tracing::warn!(
                    champion_id,
                    "similar user likes a champion missing from the catalog; skipping"
                );
                None
            }
        })
        .collect()
}
