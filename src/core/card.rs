// BizDir - core/card.rs
//
// Display strings for one business card. A thin formatting layer over the
// entity. Founding text comes from core::founded.

use crate::core::founded::describe_founded;
use crate::core::model::BusinessEntity;
use crate::util::constants;

/// Pre-formatted text for rendering a business card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub title: String,
    /// `Rank #N`, absent for unranked businesses.
    pub rank_badge: Option<String>,
    pub award_winner: bool,
    pub initials: String,
    pub industry: String,
    /// `Categories: a, b`, absent when there are none.
    pub categories: Option<String>,
    pub location: String,
    pub phone: Option<String>,
    /// Top local executive, absent when unknown.
    pub executive: Option<String>,
    /// `Page: N`, absent when the source page is unknown.
    pub page: Option<String>,
    pub employees: String,
    pub founded: String,
    pub website: Option<String>,
    /// Web search link offered when there is no website.
    pub website_search: Option<String>,
    pub description: String,
}

impl CardText {
    pub fn from_entity(entity: &BusinessEntity, current_year: i64) -> Self {
        let mut employees = match entity.local_employees {
            Some(n) => format!("{n} local employees"),
            None => "N/A local employees".to_string(),
        };
        if let Some(total) = entity.total_employees {
            employees.push_str(&format!(" ({total} total)"));
        }

        Self {
            title: entity.name.clone(),
            rank_badge: entity.rank.map(|r| format!("Rank #{r}")),
            award_winner: entity.is_award_winner,
            initials: initials(&entity.name),
            industry: entity.industry.clone(),
            categories: (!entity.categories.is_empty())
                .then(|| format!("Categories: {}", entity.categories.join(", "))),
            location: entity.location.clone(),
            phone: entity.phone_number.clone(),
            executive: entity.top_local_executive.clone(),
            page: entity.page_number.map(|p| format!("Page: {p}")),
            employees,
            founded: describe_founded(entity.year_founded.as_ref(), current_year),
            website: entity.has_website().then(|| entity.website.clone()),
            website_search: (!entity.has_website()).then(|| website_search_url(&entity.name)),
            description: entity.description.clone(),
        }
    }
}

/// Search link for a business with no known website.
pub fn website_search_url(name: &str) -> String {
    let query = format!("{name} {}", constants::WEBSITE_SEARCH_LOCALITY);
    format!(
        "{}{}",
        constants::WEBSITE_SEARCH_URL,
        urlencoding::encode(&query)
    )
}

/// Up to two initials from the first letters of space-separated words.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split(' ')
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        constants::UNKNOWN_INITIALS.to_string()
    } else {
        letters
    }
}
