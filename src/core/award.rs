// BizDir - core/award.rs
//
// Award winner lookup over canonical business names.
// Core layer: pure logic, no I/O.

use crate::core::normalize::normalize;
use crate::util::constants;
use std::collections::HashSet;

/// Membership test against a curated list of award recipients.
///
/// Built once from a name list; the list is injected (config or the built-in
/// default) rather than baked into the enricher. Matching is exact equality
/// of canonical forms, nothing fuzzier.
#[derive(Debug, Clone, Default)]
pub struct AwardMatcher {
    canonical: HashSet<String>,
}

impl AwardMatcher {
    /// Build from display names. Entries normalising identically collapse.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical: HashSet<String> = names
            .into_iter()
            .map(|name| normalize(Some(name.as_ref())))
            .filter(|c| !c.is_empty())
            .collect();

        tracing::debug!(winners = canonical.len(), "Award matcher built");

        Self { canonical }
    }

    /// Matcher over the built-in award winner list.
    pub fn builtin() -> Self {
        Self::new(constants::DEFAULT_AWARD_WINNERS.iter().copied())
    }

    /// True if `raw_name` canonicalises to a listed winner.
    pub fn is_winner(&self, raw_name: Option<&str>) -> bool {
        let canonical = normalize(raw_name);
        !canonical.is_empty() && self.canonical.contains(&canonical)
    }

    /// Number of distinct canonical names.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}
