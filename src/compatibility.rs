//! Companion Compatibility Engine
//!
//! Classifies every unordered pair in a plant selection into one of three
//! buckets (compatible / incompatible / neutral) and collects human-readable
//! reasons for the first two.
//!
//! Relationship data is NOT guaranteed symmetric: plant A may list B as a
//! companion while B's record never mentions A. Every check therefore runs
//! in both directions before a pair is classified.
//!
//! Classification precedence: compatible wins over incompatible when a pair
//! is flagged both ways in the source data. This tie-break is preserved from
//! the upstream dataset behaviour and is awaiting product clarification; do
//! not reverse it here.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Fallback reason when a compatible pair carries no recorded benefits.
pub const DEFAULT_COMPATIBLE_REASON: &str = "Enhance growth and health";

/// Generic cautions attached to every incompatible pair.
///
/// Appended per pair, then deduplicated once at the end of classification,
/// so the final report lists each caution at most once.
pub const INCOMPATIBLE_CAUTIONS: &[&str] = &[
    "May inhibit growth",
    "Compete for resources",
    "Potential pest attraction",
];

/// A plant record as supplied by the catalog layer.
///
/// `companions` and `antagonists` hold plant ids (opaque identifiers,
/// compared exactly — never case-folded). Absent fields in the source JSON
/// decode to empty collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    /// Ids of plants this plant benefits from or helps
    #[serde(default)]
    pub companions: FxHashSet<String>,
    /// Ids of plants this plant is harmed by or hinders
    #[serde(default)]
    pub antagonists: FxHashSet<String>,
    /// Free-text benefit descriptions, in source order
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl Plant {
    /// True if this plant's own record lists `other_id` as a companion.
    pub fn lists_companion(&self, other_id: &str) -> bool {
        self.companions.contains(other_id)
    }

    /// True if this plant's own record lists `other_id` as an antagonist.
    pub fn lists_antagonist(&self, other_id: &str) -> bool {
        self.antagonists.contains(other_id)
    }
}

/// One classification bucket: pair labels plus aggregated reasons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationshipGroup {
    /// Pair labels in the form `"{name1} & {name2}"`, input order preserved
    pub pairs: Vec<String>,
    /// Deduplicated reasons, first-occurrence order
    pub reasons: Vec<String>,
}

/// Full pairwise classification of a plant selection.
///
/// Every unordered pair from the input appears in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    pub compatible: RelationshipGroup,
    pub incompatible: RelationshipGroup,
    /// Pair labels with no known relationship (no reasons collected)
    pub neutral: Vec<String>,
}

impl CompatibilityReport {
    /// True if no pairs were classified (input had fewer than 2 plants).
    pub fn is_empty(&self) -> bool {
        self.compatible.pairs.is_empty()
            && self.incompatible.pairs.is_empty()
            && self.neutral.is_empty()
    }
}

/// Classify every unordered pair in `plants`.
///
/// Pure function over the supplied records; any enrichment (resolving ids
/// to full records) happens in the catalog layer before this call.
///
/// Algorithm:
/// 1. For each pair (i, j) with i < j in input order, test companion and
///    antagonist membership in BOTH directions.
/// 2. Compatible is checked first and wins; otherwise incompatible;
///    otherwise neutral.
/// 3. Compatible pairs contribute the union of both plants' benefit strings
///    (or [`DEFAULT_COMPATIBLE_REASON`] when neither has any); incompatible
///    pairs contribute [`INCOMPATIBLE_CAUTIONS`].
/// 4. Reason lists are deduplicated once at the end, preserving
///    first-occurrence order.
///
/// Fewer than 2 plants yields an empty report.
pub fn classify(plants: &[Plant]) -> CompatibilityReport {
    let mut report = CompatibilityReport::default();

    if plants.len() < 2 {
        return report;
    }

    for i in 0..plants.len() - 1 {
        for j in i + 1..plants.len() {
            let a = &plants[i];
            let b = &plants[j];
            let label = pair_label(a, b);

            let is_companion = a.lists_companion(&b.id) || b.lists_companion(&a.id);
            let is_antagonist = a.lists_antagonist(&b.id) || b.lists_antagonist(&a.id);

            if is_companion {
                report.compatible.pairs.push(label);
                push_benefit_reasons(&mut report.compatible.reasons, a, b);
            } else if is_antagonist {
                report.incompatible.pairs.push(label);
                for caution in INCOMPATIBLE_CAUTIONS {
                    report.incompatible.reasons.push((*caution).to_string());
                }
            } else {
                report.neutral.push(label);
            }
        }
    }

    dedup_preserving_order(&mut report.compatible.reasons);
    dedup_preserving_order(&mut report.incompatible.reasons);

    report
}

/// Pair label in input order, original casing preserved.
fn pair_label(a: &Plant, b: &Plant) -> String {
    format!("{} & {}", a.name, b.name)
}

/// Append both plants' benefits for one compatible pair.
///
/// When neither plant documents a benefit the pair still needs a reason, so
/// the fallback string is pushed instead. Cross-pair duplicates are handled
/// by the final dedup pass.
fn push_benefit_reasons(reasons: &mut Vec<String>, a: &Plant, b: &Plant) {
    let before = reasons.len();
    for benefit in a.benefits.iter().chain(b.benefits.iter()) {
        reasons.push(benefit.clone());
    }
    if reasons.len() == before {
        reasons.push(DEFAULT_COMPATIBLE_REASON.to_string());
    }
}

/// In-place dedup keeping the first occurrence of each string.
fn dedup_preserving_order(items: &mut Vec<String>) {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    items.retain(|item| seen.insert(item.clone()));
}
