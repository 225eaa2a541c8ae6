use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stable domain identifier for a champion.
///
/// This is the id shipped with the seed dataset and the only identity the
/// engine and API ever see; storage-internal row identities never cross the
/// service boundary.
pub type ChampionId = i32;

/// A champion in the catalog, recommendable to users.
///
/// Catalog entries are seeded out-of-band and read-only at runtime. The JSON
/// wire form keeps the seed dataset's PascalCase field names (`Id`, `Name`,
/// `Class`, ...), which the frontend renders directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Champion {
    pub id: ChampionId,
    pub name: String,
    /// Categorical class (e.g. "Fighter", "Mage"); half of the grouping key.
    pub class: String,
    /// Numeric play-style code; the other half of the grouping key.
    pub style: i32,
    pub difficulty: i32,
    pub damage_type: String,
    pub damage: i32,
    pub sturdiness: i32,
    pub crowd_control: i32,
    pub mobility: i32,
    pub functionality: i32,
}
