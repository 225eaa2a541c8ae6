mod attribute_index;
mod collaborative;
mod content_based;
mod recommend;
mod similarity;

pub use attribute_index::{build_index, group_key, GroupKey};
pub use collaborative::collaborative_recommendations;
pub use content_based::content_based_recommendations;
pub use recommend::{recommend, recommend_for_user, Recommendations};
pub use similarity::{cosine_similarity, rank_similar_users, SimilarUser};

/// Maximum number of candidates returned by either strategy.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Number of most-similar users the collaborative strategy aggregates over.
pub const SIMILAR_USER_POOL: usize = 5;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::Champion;

    pub fn champion(id: i32, class: &str, style: i32) -> Champion {
        Champion {
            id,
            name: format!("Champion {id}"),
            class: class.to_string(),
            style,
            difficulty: 1,
            damage_type: "Physical".to_string(),
            damage: 1,
            sturdiness: 1,
            crowd_control: 1,
            mobility: 1,
            functionality: 1,
        }
    }
}
