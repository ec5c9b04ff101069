//! Synonym table mapping free-text model labels to taxonomy members.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// Free-text synonyms observed in model output, paired with their
/// canonical targets. Keys are matched after lowercasing and trimming,
/// in both their spaced and underscored forms.
static LABEL_SYNONYMS: &[(&str, &str)] = &[
    // Big cats
    ("mountain lion", "mountain_lion"),
    ("puma", "mountain_lion"),
    ("cougar", "mountain_lion"),
    // Canids
    ("grey fox", "fox"),
    ("gray fox", "fox"),
    ("red fox", "fox"),
    ("kit fox", "fox"),
    ("coyote dog", "coyote"),
    // Common North American species
    ("north american raccoon", "raccoon"),
    ("white-tailed deer", "deer"),
    ("whitetail deer", "deer"),
    ("mule deer", "deer"),
    // Vehicles and people
    ("vehicle", "car"),
    ("automobile", "car"),
    ("truck", "car"),
    ("person", "human"),
    ("pedestrian", "human"),
    // Empty frames
    ("no animal", "empty"),
    ("blank", "empty"),
    ("nothing", "empty"),
    // African megafauna
    ("rhinoceros", "rhino"),
    ("elephant", "elephant"),
    // Threat activity
    ("illegal poaching", "poaching"),
    ("horn removal", "poaching"),
    ("dehorning", "conservation_dehorning"),
    ("conservation dehorning", "conservation_dehorning"),
    ("sedated rhino", "conservation_dehorning"),
    ("person with chainsaw", "human_with_tool"),
    ("human with chainsaw", "human_with_tool"),
];

fn synonym_map() -> &'static FxHashMap<&'static str, &'static str> {
    static MAP: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| LABEL_SYNONYMS.iter().copied().collect())
}

/// Look up the canonical target for a cleaned label.
pub(super) fn synonym_target(cleaned: &str) -> Option<&'static str> {
    synonym_map().get(cleaned).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::types::CanonicalLabel;

    #[test]
    fn every_synonym_targets_a_taxonomy_member() {
        for (synonym, target) in LABEL_SYNONYMS {
            assert!(
                CanonicalLabel::from_canonical_str(target).is_some(),
                "synonym {synonym:?} targets non-canonical {target:?}"
            );
        }
    }

    #[test]
    fn synonym_keys_are_unique() {
        let map = synonym_map();
        assert_eq!(map.len(), LABEL_SYNONYMS.len());
    }
}
