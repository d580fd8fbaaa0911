use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::PortfolioRecord;

/// Listing filter.
///
/// `query` matches name, title or bio case-insensitively. `role` and `skill`
/// are exact, case-sensitive facets. An empty value disables that criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PortfolioFilter {
    #[serde(default, alias = "q")]
    pub query: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub skill: String,
}

impl PortfolioFilter {
    pub fn matches(&self, record: &PortfolioRecord) -> bool {
        self.matches_query(record) && self.matches_role(record) && self.matches_skill(record)
    }

    pub fn apply<'a>(&self, records: &'a [PortfolioRecord]) -> Vec<&'a PortfolioRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.role.is_empty() && self.skill.is_empty()
    }

    fn matches_query(&self, record: &PortfolioRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        let content = &record.content;
        [
            content.hero.name.as_str(),
            content.hero.title.as_str(),
            content.about.bio.as_str(),
        ]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    fn matches_role(&self, record: &PortfolioRecord) -> bool {
        self.role.is_empty() || record.content.hero.title == self.role
    }

    fn matches_skill(&self, record: &PortfolioRecord) -> bool {
        self.skill.is_empty() || record.content.skills.iter().any(|s| *s == self.skill)
    }
}

/// Distinct roles and skills across all records, in first-seen order. These
/// populate the listing's facet dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FilterFacets {
    pub roles: Vec<String>,
    pub skills: Vec<String>,
}

impl FilterFacets {
    pub fn collect(records: &[PortfolioRecord]) -> Self {
        let mut facets = FilterFacets::default();
        for record in records {
            push_unique(&mut facets.roles, &record.content.hero.title);
            for skill in &record.content.skills {
                push_unique(&mut facets.skills, skill);
            }
        }
        facets
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}
