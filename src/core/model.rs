// BizDir - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::error::QueryError;
use serde::Serialize;
use std::str::FromStr;

/// One untyped business record exactly as found in the data file.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// Business entity (normalised output of enrichment)
// =============================================================================

/// A validated, defaulted and enriched business record.
///
/// Built once per load by the enricher and never mutated afterwards; queries
/// only subset and reorder references to these.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessEntity {
    /// Source `id`, or `gen-<index>` when the record has none.
    pub id: String,

    /// Position in the published ranking. `None` = unranked.
    pub rank: Option<i64>,

    pub name: String,

    /// Explicit industry, else the first category, else a sentinel.
    pub industry: String,

    pub location: String,

    pub phone_number: Option<String>,

    pub top_local_executive: Option<String>,

    /// Homepage URL, or `"#"` meaning "no link".
    pub website: String,

    /// `logoUrl`, falling back to `svgUrl`.
    pub logo_url: Option<String>,

    /// `svgUrl` as supplied.
    pub image_url: Option<String>,

    pub local_employees: Option<u64>,

    pub total_employees: Option<u64>,

    /// Founding information in its original form, kept for display.
    pub year_founded: Option<YearFounded>,

    pub description: String,

    /// Category tags in source order. Never null; possibly empty.
    pub categories: Vec<String>,

    /// Page of the printed source the record came from.
    pub page_number: Option<i64>,

    /// Derived at enrichment time from the award winner list.
    pub is_award_winner: bool,
}

impl BusinessEntity {
    /// Categories joined with single spaces, the form used by text search.
    pub fn categories_joined(&self) -> String {
        self.categories.join(" ")
    }

    /// Whether `website` holds a real link rather than the "no link" marker.
    pub fn has_website(&self) -> bool {
        self.website != crate::util::constants::NO_WEBSITE
    }
}

// =============================================================================
// Year founded
// =============================================================================

/// Founding information as published: a year, or a free-text description
/// such as "For 15 years" or "Est. 20+ years ago".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum YearFounded {
    Year(i64),
    Text(String),
}

impl std::fmt::Display for YearFounded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearFounded::Year(y) => write!(f, "{y}"),
            YearFounded::Text(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// Select options
// =============================================================================

/// A {value, label} pair handed to the presentation layer for dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// An option whose label is its value.
    pub fn same(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

// =============================================================================
// Sort option
// =============================================================================

/// The nine sort modes offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    /// No explicit sort: rank order when any rank exists, else input order.
    #[default]
    Default,
    RankAsc,
    RankDesc,
    EmployeesAsc,
    EmployeesDesc,
    /// Oldest first.
    YearFoundedAsc,
    /// Newest first.
    YearFoundedDesc,
    NameAsc,
    NameDesc,
}

impl SortOption {
    /// Returns all variants in menu order.
    pub fn all() -> &'static [SortOption] {
        &[
            SortOption::Default,
            SortOption::RankAsc,
            SortOption::RankDesc,
            SortOption::EmployeesAsc,
            SortOption::EmployeesDesc,
            SortOption::YearFoundedAsc,
            SortOption::YearFoundedDesc,
            SortOption::NameAsc,
            SortOption::NameDesc,
        ]
    }

    /// Stable wire value (also accepted by `from_str`).
    pub fn value(&self) -> &'static str {
        match self {
            SortOption::Default => "",
            SortOption::RankAsc => "rank_asc",
            SortOption::RankDesc => "rank_desc",
            SortOption::EmployeesAsc => "employees_asc",
            SortOption::EmployeesDesc => "employees_desc",
            SortOption::YearFoundedAsc => "yearFounded_asc",
            SortOption::YearFoundedDesc => "yearFounded_desc",
            SortOption::NameAsc => "name_asc",
            SortOption::NameDesc => "name_desc",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Default => "Default",
            SortOption::RankAsc => "Rank (Low to High)",
            SortOption::RankDesc => "Rank (High to Low)",
            SortOption::EmployeesAsc => "Employees (Low to High)",
            SortOption::EmployeesDesc => "Employees (High to Low)",
            SortOption::YearFoundedAsc => "Founded (Oldest First)",
            SortOption::YearFoundedDesc => "Founded (Newest First)",
            SortOption::NameAsc => "Name (A-Z)",
            SortOption::NameDesc => "Name (Z-A)",
        }
    }

    /// The catalogue as {value, label} options.
    pub fn options() -> Vec<SelectOption> {
        Self::all()
            .iter()
            .map(|s| SelectOption {
                value: s.value().to_string(),
                label: s.label().to_string(),
            })
            .collect()
    }
}

impl FromStr for SortOption {
    type Err = QueryError;

    /// Accepts the wire value; `"none"` and `"default"` also select the
    /// default mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("default")
        {
            return Ok(SortOption::Default);
        }
        Self::all()
            .iter()
            .copied()
            .find(|opt| opt.value().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| QueryError::UnknownSortOption {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_sort_options_in_menu_order() {
        let options = SortOption::options();
        assert_eq!(options.len(), 9);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, "Default");
        assert_eq!(options[5].value, "yearFounded_asc");
        assert_eq!(options[8].label, "Name (Z-A)");
    }

    #[test]
    fn test_sort_option_parses_wire_values() {
        for opt in SortOption::all() {
            assert_eq!(opt.value().parse::<SortOption>().unwrap(), *opt);
        }
        assert_eq!("none".parse::<SortOption>().unwrap(), SortOption::Default);
        assert_eq!(
            "YEARFOUNDED_DESC".parse::<SortOption>().unwrap(),
            SortOption::YearFoundedDesc
        );
    }

    #[test]
    fn test_unknown_sort_option_rejected() {
        let err = "size_asc".parse::<SortOption>().unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownSortOption {
                value: "size_asc".to_string()
            }
        );
    }

    #[test]
    fn test_year_founded_serialises_untagged() {
        assert_eq!(serde_json::to_string(&YearFounded::Year(1999)).unwrap(), "1999");
        assert_eq!(
            serde_json::to_string(&YearFounded::Text("For 5 years".into())).unwrap(),
            "\"For 5 years\""
        );
    }
}
