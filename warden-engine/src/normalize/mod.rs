//! Label normalization: free-text model labels into the closed taxonomy.

mod taxonomy;

use warden_core::types::CanonicalLabel;

/// Outcome of normalizing one free-text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedLabel {
    /// The input mapped into the taxonomy.
    Canonical {
        label: CanonicalLabel,
        /// True when the stored form differs from the cleaned input.
        was_normalized: bool,
    },
    /// The input matched nothing; the cleaned original is preserved for
    /// display and audit.
    Unknown { raw: String },
}

impl NormalizedLabel {
    /// The label string to store: the canonical name, or the cleaned
    /// original for unknowns.
    pub fn label(&self) -> &str {
        match self {
            Self::Canonical { label, .. } => label.name(),
            Self::Unknown { raw } => raw,
        }
    }

    /// True when normalization changed the input (synonym rewrite,
    /// underscoring, or an unrecognized label).
    pub fn was_normalized(&self) -> bool {
        match self {
            Self::Canonical { was_normalized, .. } => *was_normalized,
            Self::Unknown { .. } => true,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

/// Normalize a free-text model label into the closed taxonomy.
///
/// Lowercases and trims, consults the synonym table in both spaced and
/// underscored form, then collapses interior whitespace to underscores.
/// Input that still matches no taxonomy member is preserved as
/// [`NormalizedLabel::Unknown`] with the cleaned original.
pub fn normalize_label(raw: &str) -> NormalizedLabel {
    let cleaned = raw.trim().to_lowercase();
    let underscored = collapse_whitespace(&cleaned);

    let candidate = taxonomy::synonym_target(&cleaned)
        .or_else(|| taxonomy::synonym_target(&underscored))
        .map(str::to_string)
        .unwrap_or(underscored);

    match CanonicalLabel::from_canonical_str(&candidate) {
        Some(label) => NormalizedLabel::Canonical {
            label,
            was_normalized: candidate != cleaned,
        },
        None => NormalizedLabel::Unknown { raw: cleaned },
    }
}

/// Replace every run of whitespace with a single underscore.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_input_passes_through_unchanged() {
        let result = normalize_label("deer");
        assert_eq!(
            result,
            NormalizedLabel::Canonical { label: CanonicalLabel::Deer, was_normalized: false }
        );
    }

    #[test]
    fn case_and_padding_are_cleaned_without_counting_as_normalization() {
        let result = normalize_label("  Deer  ");
        assert_eq!(result.label(), "deer");
        assert!(!result.was_normalized());
    }

    #[test]
    fn spaced_taxonomy_names_are_underscored() {
        let result = normalize_label("human with tool");
        assert_eq!(
            result,
            NormalizedLabel::Canonical {
                label: CanonicalLabel::HumanWithTool,
                was_normalized: true,
            }
        );
    }

    #[test]
    fn unrecognized_input_keeps_the_cleaned_original() {
        let result = normalize_label("  Pangolin Crossing ");
        assert_eq!(result, NormalizedLabel::Unknown { raw: "pangolin crossing".to_string() });
        assert!(result.was_normalized());
        assert!(result.is_unknown());
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(normalize_label(""), NormalizedLabel::Unknown { raw: String::new() });
    }
}
