use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::template_catalog::TemplateKind;

const DEFAULT_PROFILE_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=400";

const DEFAULT_PROJECT_IMAGE_URLS: [&str; 3] = [
    "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=600",
    "https://images.pexels.com/photos/69432/pexels-photo-69432.jpeg?auto=compress&cs=tinysrgb&w=600",
    "https://images.pexels.com/photos/414612/pexels-photo-414612.jpeg?auto=compress&cs=tinysrgb&w=600",
];

/// Opaque lookup key of a stored portfolio. Assigned once, at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PortfolioId(Uuid);

impl PortfolioId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for PortfolioId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for PortfolioId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub profile_image_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct Social {
    pub platform: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct About {
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub socials: Vec<Social>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub image_url: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
}

/// Both fields are optional in practice; an empty title hides the
/// publications section of a rendered page.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct Blog {
    pub title: String,
    pub summary: String,
}

impl Blog {
    pub fn is_published(&self) -> bool {
        !self.title.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct Contact {
    pub message: String,
    pub email: String,
    pub phone: String,
}

/// Everything a portfolio carries except its identity and template.
///
/// The wizard accumulates edits into one of these; it only becomes a
/// [`PortfolioRecord`] on submit.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub hero: Hero,
    pub about: About,
    pub skills: Vec<String>,
    pub services: Vec<Service>,
    pub portfolio_projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub blog: Blog,
    pub contact: Contact,
}

impl PortfolioContent {
    /// Initial draft for a brand-new portfolio: one social link, one skill,
    /// three services, three projects and one testimonial, all blank.
    pub fn with_form_defaults() -> Self {
        Self {
            hero: Hero {
                profile_image_url: DEFAULT_PROFILE_IMAGE_URL.to_string(),
                ..Hero::default()
            },
            about: About {
                socials: vec![Social {
                    platform: "LinkedIn".to_string(),
                    url: String::new(),
                }],
                ..About::default()
            },
            skills: vec![String::new()],
            services: vec![Service::default(); 3],
            portfolio_projects: DEFAULT_PROJECT_IMAGE_URLS
                .iter()
                .map(|url| Project {
                    image_url: url.to_string(),
                    ..Project::default()
                })
                .collect(),
            testimonials: vec![Testimonial::default()],
            blog: Blog::default(),
            contact: Contact::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PortfolioRecord {
    pub id: PortfolioId,
    pub template: TemplateKind,
    #[serde(flatten)]
    pub content: PortfolioContent,
}

impl PortfolioRecord {
    pub fn new(id: PortfolioId, template: TemplateKind, content: PortfolioContent) -> Self {
        Self {
            id,
            template,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_seed_expected_list_sizes() {
        let draft = PortfolioContent::with_form_defaults();

        assert_eq!(draft.about.socials.len(), 1);
        assert_eq!(draft.about.socials[0].platform, "LinkedIn");
        assert_eq!(draft.skills, vec![String::new()]);
        assert_eq!(draft.services.len(), 3);
        assert_eq!(draft.portfolio_projects.len(), 3);
        assert_eq!(draft.testimonials.len(), 1);
        assert!(!draft.hero.profile_image_url.is_empty());
        assert!(draft
            .portfolio_projects
            .iter()
            .all(|project| !project.image_url.is_empty()));
    }

    #[test]
    fn record_serializes_with_flat_camel_case_shape() {
        let record = PortfolioRecord::new(
            PortfolioId::generate(),
            TemplateKind::Classic,
            PortfolioContent::default(),
        );

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["template"], "classic");
        assert!(json["hero"]["profileImageUrl"].is_string());
        assert!(json["portfolioProjects"].is_array());
        assert!(json.get("content").is_none());
    }

    #[test]
    fn blog_is_published_only_with_title() {
        let mut blog = Blog::default();
        assert!(!blog.is_published());

        blog.summary = "Summary only".to_string();
        assert!(!blog.is_published());

        blog.title = "Notes".to_string();
        assert!(blog.is_published());
    }

    #[test]
    fn portfolio_id_round_trips_through_text() {
        let id = PortfolioId::generate();
        let parsed: PortfolioId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<PortfolioId>().is_err());
    }
}
