// BizDir - core/founded.rs
//
// Founding-year interpretation: one classifier for heterogeneous
// "year founded" values, with a sort key and a display sentence both
// derived from it.
// Core layer: pure logic given a fixed current year.

use crate::core::model::YearFounded;
use chrono::Datelike;
use regex::Regex;
use std::sync::OnceLock;

/// What a founded value says about the founding year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundedEvidence {
    /// A numeric value, taken as the year without range checks.
    Numeric(i64),
    /// A text value containing a standalone 4-digit year.
    ExplicitYear(i64),
    /// "For N years".
    ForYears(i64),
    /// "over N years" / "over N+ years".
    OverYears(i64),
    /// "Est. N+ years ago".
    EstYearsAgo(i64),
    /// Text that starts with an integer literal, e.g. "1987 (approx)".
    IntegerLiteral(i64),
    /// Absent, blank, or nothing recognisable.
    Unresolved,
}

/// A comparable founding year.
///
/// `Unresolved` orders after every known year, so it sorts last when
/// ascending and first when descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResolvedYear {
    Year(i64),
    Unresolved,
}

impl ResolvedYear {
    pub fn year(&self) -> Option<i64> {
        match self {
            ResolvedYear::Year(y) => Some(*y),
            ResolvedYear::Unresolved => None,
        }
    }
}

struct FoundedPatterns {
    four_digit_year: Regex,
    for_years: Regex,
    over_years: Regex,
    est_years_ago: Regex,
    integer_prefix: Regex,
}

fn patterns() -> &'static FoundedPatterns {
    static PATTERNS: OnceLock<FoundedPatterns> = OnceLock::new();

    PATTERNS.get_or_init(|| {
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("founded: invalid regex")
        }

        FoundedPatterns {
            four_digit_year: re(r"(?-u:\b)([0-9]{4})(?-u:\b)"),
            for_years: re(r"(?i)For ([0-9]+) years"),
            over_years: re(r"(?i)over ([0-9]+)\+? years"),
            est_years_ago: re(r"(?i)Est\. ([0-9]+)\+ years ago"),
            integer_prefix: re(r"^\s*([+-]?[0-9]+)"),
        }
    })
}

/// The wall-clock year in local time.
pub fn current_year() -> i64 {
    i64::from(chrono::Local::now().year())
}

/// First capture group of `re` in `text`, as an integer.
fn capture_number(re: &Regex, text: &str) -> Option<Option<i64>> {
    re.captures(text)
        .map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<i64>().ok()))
}

type Rule = (&'static Regex, fn(i64) -> FoundedEvidence);

/// Text rules in priority order. Indices 1..4 are the duration rules.
fn text_rules() -> [Rule; 5] {
    let p = patterns();
    [
        (&p.four_digit_year, FoundedEvidence::ExplicitYear),
        (&p.for_years, FoundedEvidence::ForYears),
        (&p.over_years, FoundedEvidence::OverYears),
        (&p.est_years_ago, FoundedEvidence::EstYearsAgo),
        (&p.integer_prefix, FoundedEvidence::IntegerLiteral),
    ]
}

/// First matching rule wins. A matching rule whose number does not fit in
/// an `i64` yields `Unresolved` rather than falling through.
fn classify_text(text: &str, rules: &[Rule]) -> FoundedEvidence {
    for (re, make) in rules {
        if let Some(number) = capture_number(re, text) {
            return number.map(*make).unwrap_or(FoundedEvidence::Unresolved);
        }
    }
    FoundedEvidence::Unresolved
}

/// Classify a founded value. Rules are tried in order; the first match wins.
pub fn classify(value: Option<&YearFounded>) -> FoundedEvidence {
    match value {
        None => FoundedEvidence::Unresolved,
        Some(YearFounded::Year(y)) => FoundedEvidence::Numeric(*y),
        Some(YearFounded::Text(s)) => classify_text(s, &text_rules()),
    }
}

/// Resolve a founded value to a comparable year, relative to `current_year`.
///
/// Durations ("For 15 years") resolve to `current_year - N`. Anything
/// unrecognisable resolves to `ResolvedYear::Unresolved`.
pub fn resolve_year(value: Option<&YearFounded>, current_year: i64) -> ResolvedYear {
    let years_ago = |n: i64| {
        current_year
            .checked_sub(n)
            .map(ResolvedYear::Year)
            .unwrap_or(ResolvedYear::Unresolved)
    };

    match classify(value) {
        FoundedEvidence::Numeric(y)
        | FoundedEvidence::ExplicitYear(y)
        | FoundedEvidence::IntegerLiteral(y) => ResolvedYear::Year(y),
        FoundedEvidence::ForYears(n)
        | FoundedEvidence::OverYears(n)
        | FoundedEvidence::EstYearsAgo(n) => years_ago(n),
        FoundedEvidence::Unresolved => ResolvedYear::Unresolved,
    }
}

/// Human-readable founding sentence for a business card.
///
/// Out-of-range years (not in `1..=current_year`) are shown as-is without
/// an age, unless the text also carries a "For / over / Est." duration.
pub fn describe_founded(value: Option<&YearFounded>, current_year: i64) -> String {
    let in_range = |y: i64| y > 0 && y <= current_year;

    match value {
        None => return "Year Founded: N/A".to_string(),
        Some(YearFounded::Text(s)) if s.trim().is_empty() => {
            return "Year Founded: N/A".to_string()
        }
        _ => {}
    }

    let raw = value.map(|v| v.to_string()).unwrap_or_default();

    // An implausible explicit year in text defers to the duration phrases.
    let evidence = match (classify(value), value) {
        (FoundedEvidence::ExplicitYear(y), Some(YearFounded::Text(s))) if !in_range(y) => {
            classify_text(s, &text_rules()[1..4])
        }
        (evidence, _) => evidence,
    };

    match evidence {
        FoundedEvidence::Numeric(y) if in_range(y) => {
            format!("Founded in {y} ({} years old)", current_year - y)
        }
        FoundedEvidence::ExplicitYear(y) if in_range(y) => format!(
            "Founded in {y} ({} years old) (Source: \"{raw}\")",
            current_year - y
        ),
        FoundedEvidence::ForYears(n) => {
            format!("Founded approx. {} ({raw})", current_year.saturating_sub(n))
        }
        FoundedEvidence::OverYears(n) => format!(
            "Founded over {n} years ago (approx. {})",
            current_year.saturating_sub(n)
        ),
        FoundedEvidence::EstYearsAgo(n) => format!(
            "Established over {n} years ago (approx. {})",
            current_year.saturating_sub(n)
        ),
        _ => format!("Founded: {raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> YearFounded {
        YearFounded::Text(s.to_string())
    }

    #[test]
    fn test_numeric_passes_through() {
        assert_eq!(
            resolve_year(Some(&YearFounded::Year(2010)), 2024),
            ResolvedYear::Year(2010)
        );
        // No range validation when resolving.
        assert_eq!(
            resolve_year(Some(&YearFounded::Year(-5)), 2024),
            ResolvedYear::Year(-5)
        );
    }

    #[test]
    fn test_absent_is_unresolved() {
        assert_eq!(resolve_year(None, 2024), ResolvedYear::Unresolved);
    }

    #[test]
    fn test_descriptive_durations() {
        assert_eq!(
            resolve_year(Some(&text("For 15 years")), 2024),
            ResolvedYear::Year(2009)
        );
        assert_eq!(
            resolve_year(Some(&text("Est. 20+ years ago")), 2024),
            ResolvedYear::Year(2004)
        );
        assert_eq!(
            resolve_year(Some(&text("Serving Ottawa for over 30+ years")), 2024),
            ResolvedYear::Year(1994)
        );
        assert_eq!(
            resolve_year(Some(&text("over 12 years")), 2024),
            ResolvedYear::Year(2012)
        );
    }

    #[test]
    fn test_four_digit_year_wins_over_duration() {
        assert_eq!(
            resolve_year(Some(&text("Since 1987, for 37 years")), 2024),
            ResolvedYear::Year(1987)
        );
        assert_eq!(
            resolve_year(Some(&text("c. 1999")), 2024),
            ResolvedYear::Year(1999)
        );
    }

    #[test]
    fn test_integer_literal_prefix() {
        assert_eq!(
            resolve_year(Some(&text("  42 odd")), 2024),
            ResolvedYear::Year(42)
        );
        assert_eq!(
            resolve_year(Some(&text("12345")), 2024),
            ResolvedYear::Year(12345)
        );
    }

    #[test]
    fn test_unrecognised_text_is_unresolved() {
        assert_eq!(
            resolve_year(Some(&text("A long time ago")), 2024),
            ResolvedYear::Unresolved
        );
        assert_eq!(resolve_year(Some(&text("")), 2024), ResolvedYear::Unresolved);
        // "Est." form requires the plus sign.
        assert_eq!(
            resolve_year(Some(&text("Est. 20 years ago")), 2024),
            ResolvedYear::Unresolved
        );
    }

    #[test]
    fn test_unresolved_orders_after_every_year() {
        assert!(ResolvedYear::Year(i64::MAX) < ResolvedYear::Unresolved);
        assert!(ResolvedYear::Year(1900) < ResolvedYear::Year(2000));
    }

    #[test]
    fn test_pure_for_fixed_year() {
        let v = text("For 3 years");
        assert_eq!(resolve_year(Some(&v), 2030), ResolvedYear::Year(2027));
        assert_eq!(resolve_year(Some(&v), 2030), ResolvedYear::Year(2027));
    }

    #[test]
    fn test_describe_numeric() {
        assert_eq!(
            describe_founded(Some(&YearFounded::Year(2000)), 2024),
            "Founded in 2000 (24 years old)"
        );
        assert_eq!(
            describe_founded(Some(&YearFounded::Year(2099)), 2024),
            "Founded: 2099"
        );
    }

    #[test]
    fn test_describe_text_forms() {
        assert_eq!(
            describe_founded(Some(&text("Since 1990")), 2024),
            "Founded in 1990 (34 years old) (Source: \"Since 1990\")"
        );
        assert_eq!(
            describe_founded(Some(&text("For 15 years")), 2024),
            "Founded approx. 2009 (For 15 years)"
        );
        assert_eq!(
            describe_founded(Some(&text("over 30+ years")), 2024),
            "Founded over 30 years ago (approx. 1994)"
        );
        assert_eq!(
            describe_founded(Some(&text("Est. 20+ years ago")), 2024),
            "Established over 20 years ago (approx. 2004)"
        );
        assert_eq!(
            describe_founded(Some(&text("Family owned")), 2024),
            "Founded: Family owned"
        );
    }

    #[test]
    fn test_describe_out_of_range_year_falls_back_to_duration() {
        assert_eq!(
            describe_founded(Some(&text("For 5 years (until 2099)")), 2024),
            "Founded approx. 2019 (For 5 years (until 2099))"
        );
        assert_eq!(
            describe_founded(Some(&text("over 40 years, 0000 edition")), 2024),
            "Founded over 40 years ago (approx. 1984)"
        );
        assert_eq!(
            describe_founded(Some(&text("Opening 2099")), 2024),
            "Founded: Opening 2099"
        );
        // The sort key still takes the explicit year.
        assert_eq!(
            resolve_year(Some(&text("For 5 years (until 2099)")), 2024),
            ResolvedYear::Year(2099)
        );
    }

    #[test]
    fn test_year_boundary_is_ascii_only() {
        assert_eq!(classify(Some(&text("Créé2019"))), FoundedEvidence::ExplicitYear(2019));
        assert_eq!(classify(Some(&text("x2019"))), FoundedEvidence::Unresolved);
    }

    #[test]
    fn test_describe_missing() {
        assert_eq!(describe_founded(None, 2024), "Year Founded: N/A");
        assert_eq!(describe_founded(Some(&text("   ")), 2024), "Year Founded: N/A");
    }
}
