//! Verdict computation for a single skill record.

use crate::catalog::SkillRecord;

use super::keywords::{EXCLUDED_KEYWORDS, RELEVANT_KEYWORDS};

/// Triage verdict for one skill record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Worth keeping, filed under the given category.
    Keep { category: &'static str },
    /// Unmatched; needs a human decision.
    Review,
    /// Matched an exclusion keyword.
    Remove { keyword: &'static str },
}

/// Classify a record against the keyword tables.
///
/// Exclusions take precedence over relevance, and the relevance table is
/// scanned in order with first-match-wins semantics. Matching is a
/// case-insensitive substring test over the id and description.
pub fn classify(record: &SkillRecord) -> Verdict {
    let id = record.id.to_lowercase();
    let description = record.description.to_lowercase();

    for &keyword in EXCLUDED_KEYWORDS {
        if id.contains(keyword) || description.contains(keyword) {
            return Verdict::Remove { keyword };
        }
    }

    for &(keyword, category) in RELEVANT_KEYWORDS {
        if id.contains(keyword) || description.contains(keyword) {
            return Verdict::Keep { category };
        }
    }

    Verdict::Review
}
