use std::collections::HashMap;

use crate::models::{Champion, PreferenceSet};

/// Categorical grouping key for content-based matching: a champion's class
/// and play style taken together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub class: String,
    pub style: i32,
}

/// Returns the grouping key for a champion.
pub fn group_key(champion: &Champion) -> GroupKey {
    GroupKey {
        class: champion.class.clone(),
        style: champion.style,
    }
}

/// Groups a catalog snapshot by [`GroupKey`] for O(1) amortized lookup.
///
/// Builds in O(n); an empty catalog yields an empty map.
pub fn build_index(catalog: &[Champion]) -> HashMap<GroupKey, PreferenceSet> {
    let mut index: HashMap<GroupKey, PreferenceSet> = HashMap::new();
    for champion in catalog {
        index.entry(group_key(champion)).or_default().insert(champion.id);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::champion;

    #[test]
    fn empty_catalog_yields_empty_index() {
        assert!(build_index(&[]).is_empty());
    }

    #[test]
    fn groups_by_class_and_style() {
        let catalog = vec![
            champion(1, "Fighter", 0),
            champion(2, "Fighter", 0),
            champion(3, "Mage", 1),
            champion(4, "Fighter", 2),
        ];

        let index = build_index(&catalog);
        assert_eq!(index.len(), 3);

        let fighters = &index[&GroupKey { class: "Fighter".to_string(), style: 0 }];
        assert_eq!(fighters.iter().copied().collect::<Vec<_>>(), vec![1, 2]);

        // Same class but a different style lands in its own group.
        let key = GroupKey { class: "Fighter".to_string(), style: 2 };
        assert_eq!(index[&key].iter().copied().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn duplicate_ids_collapse() {
        let catalog = vec![champion(7, "Mage", 1), champion(7, "Mage", 1)];
        let index = build_index(&catalog);
        let key = GroupKey { class: "Mage".to_string(), style: 1 };
        assert_eq!(index[&key].len(), 1);
    }
}
