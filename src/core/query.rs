// BizDir - core/query.rs
//
// Search, filter and sort over the enriched entity set.
// All active filters are AND-combined; filtering runs before sorting.
// Core layer: pure logic, no I/O, never mutates its input.

use crate::core::founded::{current_year, resolve_year};
use crate::core::model::{BusinessEntity, SortOption};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Complete query state. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Case-insensitive substring matched against name, description and
    /// categories.
    pub search_term: String,

    /// Exact industry to keep.
    pub industry: String,

    /// Exact location to keep.
    pub location: String,

    pub sort: SortOption,
}

impl QueryParams {
    /// Returns true if no filter is active and the sort is the default.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.industry.is_empty()
            && self.location.is_empty()
            && self.sort == SortOption::Default
    }

    /// Clear all four parameters in one step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Apply `params` to `entities`, returning indices into `entities` in view
/// order.
///
/// The wall-clock year is read once and used for every founded-year
/// comparison of this call.
pub fn apply_query(entities: &[BusinessEntity], params: &QueryParams) -> Vec<usize> {
    apply_query_at(entities, params, current_year())
}

/// `apply_query` with an explicit current year.
pub fn apply_query_at(
    entities: &[BusinessEntity],
    params: &QueryParams,
    current_year: i64,
) -> Vec<usize> {
    let search_lower = params.search_term.to_lowercase();

    let mut indices: Vec<usize> = entities
        .iter()
        .enumerate()
        .filter(|(_, entity)| matches_all(entity, params, &search_lower))
        .map(|(idx, _)| idx)
        .collect();

    sort_indices(entities, &mut indices, params.sort, current_year);

    tracing::debug!(
        total = entities.len(),
        matched = indices.len(),
        sort = params.sort.value(),
        "Query applied"
    );

    indices
}

/// Convenience wrapper returning entity references in view order.
pub fn query<'a>(entities: &'a [BusinessEntity], params: &QueryParams) -> Vec<&'a BusinessEntity> {
    apply_query(entities, params)
        .into_iter()
        .map(|idx| &entities[idx])
        .collect()
}

/// Check if a single entity passes every active filter.
fn matches_all(entity: &BusinessEntity, params: &QueryParams, search_lower: &str) -> bool {
    // Text search: any one of the three fields may match
    if !search_lower.is_empty()
        && !entity.name.to_lowercase().contains(search_lower)
        && !entity.description.to_lowercase().contains(search_lower)
        && !entity
            .categories_joined()
            .to_lowercase()
            .contains(search_lower)
    {
        return false;
    }

    if !params.industry.is_empty() && entity.industry != params.industry {
        return false;
    }

    if !params.location.is_empty() && entity.location != params.location {
        return false;
    }

    true
}

// =============================================================================
// Sorting
// =============================================================================

/// Stable sort of `indices` by `sort`. Ties keep their input order.
fn sort_indices(
    entities: &[BusinessEntity],
    indices: &mut [usize],
    sort: SortOption,
    current_year: i64,
) {
    let founded = |e: &BusinessEntity| resolve_year(e.year_founded.as_ref(), current_year);

    match sort {
        SortOption::RankAsc => sort_by_entity(entities, indices, |a, b| {
            missing_last(a.rank, b.rank, false)
        }),
        SortOption::RankDesc => sort_by_entity(entities, indices, |a, b| {
            missing_last(a.rank, b.rank, true)
        }),
        SortOption::EmployeesAsc => sort_by_entity(entities, indices, |a, b| {
            missing_last(a.local_employees, b.local_employees, false)
        }),
        SortOption::EmployeesDesc => sort_by_entity(entities, indices, |a, b| {
            missing_last(a.local_employees, b.local_employees, true)
        }),
        // Resolved per comparison; unresolved years order after every year.
        SortOption::YearFoundedAsc => {
            sort_by_entity(entities, indices, |a, b| founded(a).cmp(&founded(b)))
        }
        SortOption::YearFoundedDesc => {
            sort_by_entity(entities, indices, |a, b| founded(b).cmp(&founded(a)))
        }
        SortOption::NameAsc => {
            sort_by_entity(entities, indices, |a, b| locale_cmp(&a.name, &b.name))
        }
        SortOption::NameDesc => {
            sort_by_entity(entities, indices, |a, b| locale_cmp(&b.name, &a.name))
        }
        SortOption::Default => {
            // Rank order only when the filtered set carries any rank at all.
            if indices.iter().any(|&i| entities[i].rank.is_some()) {
                sort_by_entity(entities, indices, |a, b| {
                    missing_last(a.rank, b.rank, false)
                });
            }
        }
    }
}

fn sort_by_entity<F>(entities: &[BusinessEntity], indices: &mut [usize], mut cmp: F)
where
    F: FnMut(&BusinessEntity, &BusinessEntity) -> Ordering,
{
    indices.sort_by(|&a, &b| cmp(&entities[a], &entities[b]));
}

/// Order two optional keys; present values compare in the requested
/// direction and absent values always go last.
fn missing_last<T: Ord>(a: Option<T>, b: Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Lower-cased, canonically decomposed characters of `s`, optionally
/// without combining marks.
fn folded_chars(s: &str, keep_marks: bool) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(move |&c| keep_marks || !is_combining_mark(c))
        .flat_map(char::to_lowercase)
}

/// Human-oriented name ordering.
///
/// Primary: base letters, ignoring case and accents ("École" sorts with
/// "Ecole", before "Zeta"). Secondary: unaccented before accented.
/// Tertiary: at the first differing character, lower case sorts before
/// upper case. Final: code point order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    folded_chars(a, false)
        .cmp(folded_chars(b, false))
        .then_with(|| folded_chars(a, true).cmp(folded_chars(b, true)))
        .then_with(|| {
            for (ca, cb) in a.chars().zip(b.chars()) {
                if ca == cb {
                    continue;
                }
                return match (ca.is_lowercase(), cb.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => ca.cmp(&cb),
                };
            }
            a.len().cmp(&b.len())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::YearFounded;

    fn make_entity(id: &str, name: &str) -> BusinessEntity {
        BusinessEntity {
            id: id.to_string(),
            rank: None,
            name: name.to_string(),
            industry: "Unknown Industry".to_string(),
            location: "Unknown Location".to_string(),
            phone_number: None,
            top_local_executive: None,
            website: "#".to_string(),
            logo_url: None,
            image_url: None,
            local_employees: None,
            total_employees: None,
            year_founded: None,
            description: "No description available.".to_string(),
            categories: Vec::new(),
            page_number: None,
            is_award_winner: false,
        }
    }

    fn ranked(id: &str, rank: Option<i64>) -> BusinessEntity {
        BusinessEntity {
            rank,
            ..make_entity(id, id)
        }
    }

    fn ids(entities: &[BusinessEntity], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| entities[i].id.clone()).collect()
    }

    fn sorted(entities: &[BusinessEntity], sort: SortOption) -> Vec<String> {
        let params = QueryParams {
            sort,
            ..Default::default()
        };
        ids(entities, &apply_query_at(entities, &params, 2024))
    }

    #[test]
    fn test_empty_params_is_identity_without_ranks() {
        let entities = vec![
            make_entity("c", "Charlie"),
            make_entity("a", "Alpha"),
            make_entity("b", "Bravo"),
        ];
        let params = QueryParams::default();
        assert!(params.is_empty());
        assert_eq!(apply_query_at(&entities, &params, 2024), vec![0, 1, 2]);
    }

    #[test]
    fn test_default_sort_uses_rank_when_present() {
        let entities = vec![
            ranked("x", None),
            ranked("b", Some(2)),
            ranked("a", Some(1)),
        ];
        assert_eq!(sorted(&entities, SortOption::Default), vec!["a", "b", "x"]);
    }

    #[test]
    fn test_default_sort_checks_ranks_after_filtering() {
        let entities = vec![
            ranked("unranked-2", None),
            ranked("ranked", Some(1)),
            ranked("unranked-1", None),
        ];
        let params = QueryParams {
            search_term: "unranked".to_string(),
            ..Default::default()
        };
        let result = apply_query_at(&entities, &params, 2024);
        assert_eq!(ids(&entities, &result), vec!["unranked-2", "unranked-1"]);
    }

    #[test]
    fn test_text_search_matches_any_field_case_insensitively() {
        let mut entities = vec![
            make_entity("1", "Ottawa BAKERY"),
            make_entity("2", "Widgets"),
            make_entity("3", "Gadgets"),
            make_entity("4", "Other"),
        ];
        entities[1].description = "Fresh bakery goods".to_string();
        entities[2].categories = vec!["Food".to_string(), "Bakery Supplies".to_string()];
        let params = QueryParams {
            search_term: "bakery".to_string(),
            ..Default::default()
        };
        let result = apply_query_at(&entities, &params, 2024);
        assert_eq!(ids(&entities, &result), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_spans_joined_categories() {
        let mut entities = vec![make_entity("1", "X")];
        entities[0].categories = vec!["Real".to_string(), "Estate".to_string()];
        let params = QueryParams {
            search_term: "real estate".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_query_at(&entities, &params, 2024), vec![0]);
    }

    #[test]
    fn test_filters_are_and_combined() {
        let mut a = make_entity("A", "A");
        a.industry = "Tech".to_string();
        a.location = "Ottawa".to_string();
        let mut b = make_entity("B", "B");
        b.industry = "Tech".to_string();
        b.location = "Kanata".to_string();
        let entities = vec![a, b];

        let params = QueryParams {
            industry: "Tech".to_string(),
            location: "Ottawa".to_string(),
            ..Default::default()
        };
        let result = apply_query_at(&entities, &params, 2024);
        assert_eq!(ids(&entities, &result), vec!["A"]);
    }

    #[test]
    fn test_industry_filter_is_exact() {
        let mut a = make_entity("A", "A");
        a.industry = "Technology".to_string();
        let entities = vec![a];
        let params = QueryParams {
            industry: "Tech".to_string(),
            ..Default::default()
        };
        assert!(apply_query_at(&entities, &params, 2024).is_empty());
    }

    #[test]
    fn test_rank_sort_is_stable() {
        let entities = vec![
            ranked("first", Some(5)),
            ranked("top", Some(1)),
            ranked("second", Some(5)),
        ];
        assert_eq!(
            sorted(&entities, SortOption::RankAsc),
            vec!["top", "first", "second"]
        );
    }

    #[test]
    fn test_missing_rank_sorts_last_both_directions() {
        let entities = vec![ranked("none", None), ranked("1", Some(1)), ranked("9", Some(9))];
        assert_eq!(sorted(&entities, SortOption::RankAsc), vec!["1", "9", "none"]);
        assert_eq!(sorted(&entities, SortOption::RankDesc), vec!["9", "1", "none"]);
    }

    #[test]
    fn test_employee_sorts() {
        let mut entities = vec![
            make_entity("none", "n"),
            make_entity("small", "s"),
            make_entity("big", "b"),
        ];
        entities[1].local_employees = Some(10);
        entities[2].local_employees = Some(500);
        assert_eq!(
            sorted(&entities, SortOption::EmployeesAsc),
            vec!["small", "big", "none"]
        );
        assert_eq!(
            sorted(&entities, SortOption::EmployeesDesc),
            vec!["big", "small", "none"]
        );
    }

    #[test]
    fn test_year_founded_sorts() {
        let mut entities = vec![
            make_entity("unknown", "u"),
            make_entity("for15", "f"),
            make_entity("y1990", "y"),
            make_entity("est20", "e"),
        ];
        entities[0].year_founded = Some(YearFounded::Text("Ages ago".into()));
        entities[1].year_founded = Some(YearFounded::Text("For 15 years".into()));
        entities[2].year_founded = Some(YearFounded::Year(1990));
        entities[3].year_founded = Some(YearFounded::Text("Est. 20+ years ago".into()));

        assert_eq!(
            sorted(&entities, SortOption::YearFoundedAsc),
            vec!["y1990", "est20", "for15", "unknown"]
        );
        assert_eq!(
            sorted(&entities, SortOption::YearFoundedDesc),
            vec!["unknown", "for15", "est20", "y1990"]
        );
    }

    #[test]
    fn test_name_sorts() {
        let entities = vec![
            make_entity("a", "Alpha"),
            make_entity("z", "Zeta"),
            make_entity("b", "Beta"),
        ];
        assert_eq!(sorted(&entities, SortOption::NameDesc), vec!["z", "b", "a"]);
        assert_eq!(sorted(&entities, SortOption::NameAsc), vec!["a", "b", "z"]);
    }

    #[test]
    fn test_locale_cmp_is_case_insensitive_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zoo", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("abc", "abc"), Ordering::Equal);
        assert_eq!(locale_cmp("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn test_locale_cmp_ignores_accents_first() {
        assert_eq!(locale_cmp("École Cité", "Zeta"), Ordering::Less);
        assert_eq!(locale_cmp("Énergie Ottawa", "Ecole"), Ordering::Greater);
        assert_eq!(locale_cmp("cote", "côte"), Ordering::Less);
        assert_eq!(locale_cmp("Côte", "côte"), Ordering::Greater);
    }

    #[test]
    fn test_name_sorts_accented_names_by_base_letter() {
        let entities = vec![
            make_entity("zeta", "Zeta"),
            make_entity("ecole", "École Cité"),
            make_entity("alpha", "Alpha"),
            make_entity("energie", "Énergie Ottawa"),
        ];
        assert_eq!(
            sorted(&entities, SortOption::NameAsc),
            vec!["alpha", "ecole", "energie", "zeta"]
        );
        assert_eq!(
            sorted(&entities, SortOption::NameDesc),
            vec!["zeta", "energie", "ecole", "alpha"]
        );
    }

    #[test]
    fn test_query_does_not_mutate_input() {
        let entities = vec![ranked("b", Some(2)), ranked("a", Some(1))];
        let before = entities.clone();
        let view = query(&entities, &QueryParams::default());
        assert_eq!(view[0].id, "a");
        assert_eq!(entities, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut params = QueryParams {
            search_term: "x".into(),
            industry: "Tech".into(),
            location: "Ottawa".into(),
            sort: SortOption::NameDesc,
        };
        params.reset();
        assert!(params.is_empty());
    }
}
