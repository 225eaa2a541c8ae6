mod champion;
mod user;

pub use champion::{Champion, ChampionId};
pub use user::{NewUser, User, UserProfile};

use std::collections::BTreeSet;

/// The set of champion ids a user has liked. Duplicates collapse and order is
/// irrelevant; the ordered set keeps iteration deterministic.
pub type PreferenceSet = BTreeSet<ChampionId>;
