use std::collections::{HashMap, HashSet};

use crate::models::{Champion, ChampionId, PreferenceSet};

use super::{build_index, group_key, GroupKey, MAX_RECOMMENDATIONS};

/// Champions sharing a class and play style with at least one liked champion,
/// excluding the liked champions themselves.
///
/// Liked ids that resolve to nothing in the catalog are ignored; upstream
/// validation keeps them out, but a stale id must not fail the request.
/// Matches are ordered ascending by id so equal matches rank identically
/// across runs, then capped at [`MAX_RECOMMENDATIONS`]. An empty liked set
/// yields no output: there is no content signal to match on.
pub fn content_based_recommendations(
    liked: &PreferenceSet,
    catalog: &[Champion],
) -> Vec<Champion> {
    if liked.is_empty() {
        return Vec::new();
    }

    let liked_keys: HashSet<GroupKey> = catalog
        .iter()
        .filter(|champion| liked.contains(&champion.id))
        .map(group_key)
        .collect();

    // The ordered set of candidate ids doubles as the tie-break: ascending id.
    let index = build_index(catalog);
    let candidates: PreferenceSet = liked_keys
        .iter()
        .filter_map(|key| index.get(key))
        .flatten()
        .copied()
        .filter(|id| !liked.contains(id))
        .collect();

    let by_id: HashMap<ChampionId, &Champion> =
        catalog.iter().map(|champion| (champion.id, champion)).collect();

    candidates
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .filter_map(|id| by_id.get(id))
        .map(|champion| (*champion).clone())
        .collect()
}
