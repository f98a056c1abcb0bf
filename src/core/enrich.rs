// BizDir - core/enrich.rs
//
// Raw record -> BusinessEntity mapping with per-field defaulting, plus the
// industry/location option lists derived from a full pass.
// Core layer: pure logic, never fails.

use crate::core::award::AwardMatcher;
use crate::core::model::{BusinessEntity, RawRecord, SelectOption, YearFounded};
use crate::util::constants;
use serde_json::Value;
use std::collections::BTreeSet;

/// Output of one enrichment pass over the whole data file.
#[derive(Debug, Clone, Default)]
pub struct EnrichedDirectory {
    /// Entities in source order.
    pub entities: Vec<BusinessEntity>,

    /// Distinct non-empty industries, sorted.
    pub industries: Vec<SelectOption>,

    /// Distinct non-empty locations, sorted.
    pub locations: Vec<SelectOption>,
}

// =============================================================================
// Type-guarded field access
// =============================================================================

/// A non-empty string field.
fn text_field(raw: &RawRecord, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// A number that holds an integral value (`3` and `3.0` both qualify).
fn integer_of(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f as i64)
}

fn integer_field(raw: &RawRecord, key: &str) -> Option<i64> {
    raw.get(key).and_then(integer_of)
}

fn count_field(raw: &RawRecord, key: &str) -> Option<u64> {
    integer_field(raw, key).and_then(|i| u64::try_from(i).ok())
}

/// Source ids may be strings or numbers; zero and "" count as absent.
fn id_field(raw: &RawRecord) -> Option<String> {
    match raw.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn founded_field(raw: &RawRecord) -> Option<YearFounded> {
    let value = raw.get("founded")?;
    match value {
        Value::Number(n) => Some(match integer_of(value) {
            Some(y) => YearFounded::Year(y),
            None => YearFounded::Text(n.to_string()),
        }),
        Value::String(s) => Some(YearFounded::Text(s.clone())),
        _ => None,
    }
}

/// String categories in source order; anything else in the array is dropped.
fn categories_field(raw: &RawRecord) -> Vec<String> {
    match raw.get("categories") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn first_category(raw: &RawRecord) -> Option<String> {
    match raw.get("categories") {
        Some(Value::Array(items)) => match items.first() {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        },
        _ => None,
    }
}

// =============================================================================
// Enrichment
// =============================================================================

/// Map one raw record to an entity. Total: every field defaults on its own,
/// so a malformed record never affects its neighbours.
///
/// `index` is the record's position in the input and only feeds the
/// synthesised `gen-<index>` id.
pub fn enrich(raw: &RawRecord, index: usize, awards: &AwardMatcher) -> BusinessEntity {
    let name = text_field(raw, "name").unwrap_or_else(|| constants::UNKNOWN_BUSINESS.to_string());
    let is_award_winner = awards.is_winner(Some(name.as_str()));

    BusinessEntity {
        id: id_field(raw)
            .unwrap_or_else(|| format!("{}{index}", constants::GENERATED_ID_PREFIX)),
        rank: integer_field(raw, "rank"),
        industry: text_field(raw, "industry")
            .or_else(|| first_category(raw))
            .unwrap_or_else(|| constants::UNKNOWN_INDUSTRY.to_string()),
        location: text_field(raw, "location")
            .unwrap_or_else(|| constants::UNKNOWN_LOCATION.to_string()),
        phone_number: text_field(raw, "phoneNumber"),
        top_local_executive: text_field(raw, "topLocalExecutive"),
        website: text_field(raw, "website").unwrap_or_else(|| constants::NO_WEBSITE.to_string()),
        logo_url: text_field(raw, "logoUrl").or_else(|| text_field(raw, "svgUrl")),
        image_url: text_field(raw, "svgUrl"),
        local_employees: count_field(raw, "localEmployees"),
        total_employees: count_field(raw, "totalEmployees"),
        year_founded: founded_field(raw),
        description: text_field(raw, "description")
            .unwrap_or_else(|| constants::NO_DESCRIPTION.to_string()),
        categories: categories_field(raw),
        page_number: integer_field(raw, "pageNumber"),
        is_award_winner,
        name,
    }
}

/// Enrich an arbitrary JSON value. Non-object values enrich as an empty
/// record and therefore come out fully defaulted.
pub fn enrich_value(value: &Value, index: usize, awards: &AwardMatcher) -> BusinessEntity {
    match value {
        Value::Object(raw) => enrich(raw, index, awards),
        other => {
            tracing::debug!(index, kind = json_kind(other), "Record is not an object; defaulting");
            enrich(&RawRecord::new(), index, awards)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Distinct non-empty values, sorted, as {value, label} options.
fn distinct_options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<SelectOption> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(SelectOption::same)
        .collect()
}

/// Industry options for a full entity set.
pub fn industry_options(entities: &[BusinessEntity]) -> Vec<SelectOption> {
    distinct_options(entities.iter().map(|e| e.industry.as_str()))
}

/// Location options for a full entity set.
pub fn location_options(entities: &[BusinessEntity]) -> Vec<SelectOption> {
    distinct_options(entities.iter().map(|e| e.location.as_str()))
}

/// Enrich every record and derive the option lists once for the pass.
pub fn enrich_all(records: &[Value], awards: &AwardMatcher) -> EnrichedDirectory {
    let entities: Vec<BusinessEntity> = records
        .iter()
        .enumerate()
        .map(|(index, value)| enrich_value(value, index, awards))
        .collect();

    let generated_ids = entities
        .iter()
        .filter(|e| e.id.starts_with(constants::GENERATED_ID_PREFIX))
        .count();
    let award_winners = entities.iter().filter(|e| e.is_award_winner).count();

    let industries = industry_options(&entities);
    let locations = location_options(&entities);

    tracing::debug!(
        records = entities.len(),
        generated_ids,
        award_winners,
        industries = industries.len(),
        locations = locations.len(),
        "Enrichment pass complete"
    );

    EnrichedDirectory {
        entities,
        industries,
        locations,
    }
}
