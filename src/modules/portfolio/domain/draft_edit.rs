//! Typed edits applied to a portfolio draft.
//!
//! Every editable leaf of [`PortfolioContent`] is named by exactly one variant
//! below, so an edit either targets a real field or does not exist. The dotted
//! keys used by HTML forms (`hero.name`, `services.1.description`,
//! `skills.0`) are parsed into these variants by [`FieldKey`].

use std::fmt;
use std::str::FromStr;

use super::entities::{PortfolioContent, Project, Service, Social, Testimonial};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    HeroName,
    HeroTitle,
    HeroTagline,
    HeroProfileImageUrl,
    AboutBio,
    AboutEmail,
    AboutPhone,
    AboutLocation,
    BlogTitle,
    BlogSummary,
    ContactMessage,
    ContactEmail,
    ContactPhone,
}

const SCALAR_KEYS: [(ScalarField, &str); 13] = [
    (ScalarField::HeroName, "hero.name"),
    (ScalarField::HeroTitle, "hero.title"),
    (ScalarField::HeroTagline, "hero.tagline"),
    (ScalarField::HeroProfileImageUrl, "hero.profileImageUrl"),
    (ScalarField::AboutBio, "about.bio"),
    (ScalarField::AboutEmail, "about.email"),
    (ScalarField::AboutPhone, "about.phone"),
    (ScalarField::AboutLocation, "about.location"),
    (ScalarField::BlogTitle, "blog.title"),
    (ScalarField::BlogSummary, "blog.summary"),
    (ScalarField::ContactMessage, "contact.message"),
    (ScalarField::ContactEmail, "contact.email"),
    (ScalarField::ContactPhone, "contact.phone"),
];

impl ScalarField {
    pub fn key(&self) -> &'static str {
        SCALAR_KEYS
            .iter()
            .find(|(field, _)| field == self)
            .map(|(_, key)| *key)
            .unwrap_or("")
    }

    fn slot<'a>(&self, draft: &'a mut PortfolioContent) -> &'a mut String {
        match self {
            ScalarField::HeroName => &mut draft.hero.name,
            ScalarField::HeroTitle => &mut draft.hero.title,
            ScalarField::HeroTagline => &mut draft.hero.tagline,
            ScalarField::HeroProfileImageUrl => &mut draft.hero.profile_image_url,
            ScalarField::AboutBio => &mut draft.about.bio,
            ScalarField::AboutEmail => &mut draft.about.email,
            ScalarField::AboutPhone => &mut draft.about.phone,
            ScalarField::AboutLocation => &mut draft.about.location,
            ScalarField::BlogTitle => &mut draft.blog.title,
            ScalarField::BlogSummary => &mut draft.blog.summary,
            ScalarField::ContactMessage => &mut draft.contact.message,
            ScalarField::ContactEmail => &mut draft.contact.email,
            ScalarField::ContactPhone => &mut draft.contact.phone,
        }
    }
}

/// A list-valued part of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSection {
    Socials,
    Skills,
    Services,
    Projects,
    Testimonials,
}

impl ListSection {
    pub fn key(&self) -> &'static str {
        match self {
            ListSection::Socials => "about.socials",
            ListSection::Skills => "skills",
            ListSection::Services => "services",
            ListSection::Projects => "portfolioProjects",
            ListSection::Testimonials => "testimonials",
        }
    }

    pub fn len(&self, draft: &PortfolioContent) -> usize {
        match self {
            ListSection::Socials => draft.about.socials.len(),
            ListSection::Skills => draft.skills.len(),
            ListSection::Services => draft.services.len(),
            ListSection::Projects => draft.portfolio_projects.len(),
            ListSection::Testimonials => draft.testimonials.len(),
        }
    }

    fn all() -> [ListSection; 5] {
        [
            ListSection::Socials,
            ListSection::Skills,
            ListSection::Services,
            ListSection::Projects,
            ListSection::Testimonials,
        ]
    }
}

impl fmt::Display for ListSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ListSection {
    type Err = FieldKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListSection::all()
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| FieldKeyError::UnknownSection(s.to_string()))
    }
}

/// One field of one element of a struct-valued list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexedField {
    SocialPlatform,
    SocialUrl,
    ServiceTitle,
    ServiceDescription,
    ProjectTitle,
    ProjectImageUrl,
    ProjectDescription,
    TestimonialName,
    TestimonialRole,
    TestimonialQuote,
}

impl IndexedField {
    pub fn section(&self) -> ListSection {
        match self {
            IndexedField::SocialPlatform | IndexedField::SocialUrl => ListSection::Socials,
            IndexedField::ServiceTitle | IndexedField::ServiceDescription => {
                ListSection::Services
            }
            IndexedField::ProjectTitle
            | IndexedField::ProjectImageUrl
            | IndexedField::ProjectDescription => ListSection::Projects,
            IndexedField::TestimonialName
            | IndexedField::TestimonialRole
            | IndexedField::TestimonialQuote => ListSection::Testimonials,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            IndexedField::SocialPlatform => "platform",
            IndexedField::SocialUrl => "url",
            IndexedField::ServiceTitle | IndexedField::ProjectTitle => "title",
            IndexedField::ServiceDescription | IndexedField::ProjectDescription => "description",
            IndexedField::ProjectImageUrl => "imageUrl",
            IndexedField::TestimonialName => "name",
            IndexedField::TestimonialRole => "role",
            IndexedField::TestimonialQuote => "quote",
        }
    }

    fn resolve(section: ListSection, field: &str) -> Option<IndexedField> {
        let resolved = match (section, field) {
            (ListSection::Socials, "platform") => IndexedField::SocialPlatform,
            (ListSection::Socials, "url") => IndexedField::SocialUrl,
            (ListSection::Services, "title") => IndexedField::ServiceTitle,
            (ListSection::Services, "description") => IndexedField::ServiceDescription,
            (ListSection::Projects, "title") => IndexedField::ProjectTitle,
            (ListSection::Projects, "imageUrl") => IndexedField::ProjectImageUrl,
            (ListSection::Projects, "description") => IndexedField::ProjectDescription,
            (ListSection::Testimonials, "name") => IndexedField::TestimonialName,
            (ListSection::Testimonials, "role") => IndexedField::TestimonialRole,
            (ListSection::Testimonials, "quote") => IndexedField::TestimonialQuote,
            _ => return None,
        };
        Some(resolved)
    }

    fn slot<'a>(&self, draft: &'a mut PortfolioContent, index: usize) -> Option<&'a mut String> {
        let slot = match self {
            IndexedField::SocialPlatform => &mut draft.about.socials.get_mut(index)?.platform,
            IndexedField::SocialUrl => &mut draft.about.socials.get_mut(index)?.url,
            IndexedField::ServiceTitle => &mut draft.services.get_mut(index)?.title,
            IndexedField::ServiceDescription => &mut draft.services.get_mut(index)?.description,
            IndexedField::ProjectTitle => &mut draft.portfolio_projects.get_mut(index)?.title,
            IndexedField::ProjectImageUrl => {
                &mut draft.portfolio_projects.get_mut(index)?.image_url
            }
            IndexedField::ProjectDescription => {
                &mut draft.portfolio_projects.get_mut(index)?.description
            }
            IndexedField::TestimonialName => &mut draft.testimonials.get_mut(index)?.name,
            IndexedField::TestimonialRole => &mut draft.testimonials.get_mut(index)?.role,
            IndexedField::TestimonialQuote => &mut draft.testimonials.get_mut(index)?.quote,
        };
        Some(slot)
    }
}

/// A value to append to a list section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Social(Social),
    Skill(String),
    Service(Service),
    Project(Project),
    Testimonial(Testimonial),
}

impl ListItem {
    /// The blank element the form appends for "Add ..." buttons.
    pub fn blank(section: ListSection) -> Self {
        match section {
            ListSection::Socials => ListItem::Social(Social::default()),
            ListSection::Skills => ListItem::Skill(String::new()),
            ListSection::Services => ListItem::Service(Service::default()),
            ListSection::Projects => ListItem::Project(Project::default()),
            ListSection::Testimonials => ListItem::Testimonial(Testimonial::default()),
        }
    }

    pub fn section(&self) -> ListSection {
        match self {
            ListItem::Social(_) => ListSection::Socials,
            ListItem::Skill(_) => ListSection::Skills,
            ListItem::Service(_) => ListSection::Services,
            ListItem::Project(_) => ListSection::Projects,
            ListItem::Testimonial(_) => ListSection::Testimonials,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftEditError {
    #[error("Index {index} is out of range for {section} (length {len})")]
    IndexOutOfRange {
        section: ListSection,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    SetScalar {
        field: ScalarField,
        value: String,
    },
    SetIndexed {
        field: IndexedField,
        index: usize,
        value: String,
    },
    SetSkill {
        index: usize,
        value: String,
    },
    Append(ListItem),
    Remove {
        section: ListSection,
        index: usize,
    },
}

impl DraftEdit {
    /// Applies the edit in place. A rejected edit leaves the draft untouched.
    pub fn apply(self, draft: &mut PortfolioContent) -> Result<(), DraftEditError> {
        match self {
            DraftEdit::SetScalar { field, value } => {
                *field.slot(draft) = value;
                Ok(())
            }
            DraftEdit::SetIndexed {
                field,
                index,
                value,
            } => {
                let len = field.section().len(draft);
                let slot = field
                    .slot(draft, index)
                    .ok_or(DraftEditError::IndexOutOfRange {
                        section: field.section(),
                        index,
                        len,
                    })?;
                *slot = value;
                Ok(())
            }
            DraftEdit::SetSkill { index, value } => {
                let len = draft.skills.len();
                let slot = draft
                    .skills
                    .get_mut(index)
                    .ok_or(DraftEditError::IndexOutOfRange {
                        section: ListSection::Skills,
                        index,
                        len,
                    })?;
                *slot = value;
                Ok(())
            }
            DraftEdit::Append(item) => {
                match item {
                    ListItem::Social(social) => draft.about.socials.push(social),
                    ListItem::Skill(skill) => draft.skills.push(skill),
                    ListItem::Service(service) => draft.services.push(service),
                    ListItem::Project(project) => draft.portfolio_projects.push(project),
                    ListItem::Testimonial(testimonial) => draft.testimonials.push(testimonial),
                }
                Ok(())
            }
            DraftEdit::Remove { section, index } => {
                let len = section.len(draft);
                if index >= len {
                    return Err(DraftEditError::IndexOutOfRange {
                        section,
                        index,
                        len,
                    });
                }
                match section {
                    ListSection::Socials => {
                        draft.about.socials.remove(index);
                    }
                    ListSection::Skills => {
                        draft.skills.remove(index);
                    }
                    ListSection::Services => {
                        draft.services.remove(index);
                    }
                    ListSection::Projects => {
                        draft.portfolio_projects.remove(index);
                    }
                    ListSection::Testimonials => {
                        draft.testimonials.remove(index);
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldKeyError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown list section: {0}")]
    UnknownSection(String),

    #[error("Invalid index in field: {0}")]
    InvalidIndex(String),
}

/// Address of one editable string in the draft, as written in form keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Scalar(ScalarField),
    Indexed(IndexedField, usize),
    Skill(usize),
}

impl FieldKey {
    pub fn assign(self, value: String) -> DraftEdit {
        match self {
            FieldKey::Scalar(field) => DraftEdit::SetScalar { field, value },
            FieldKey::Indexed(field, index) => DraftEdit::SetIndexed {
                field,
                index,
                value,
            },
            FieldKey::Skill(index) => DraftEdit::SetSkill { index, value },
        }
    }
}

impl FromStr for FieldKey {
    type Err = FieldKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((field, _)) = SCALAR_KEYS.iter().find(|(_, key)| *key == s) {
            return Ok(FieldKey::Scalar(*field));
        }

        if let Some(rest) = s.strip_prefix("skills.") {
            let index = rest
                .parse::<usize>()
                .map_err(|_| FieldKeyError::InvalidIndex(s.to_string()))?;
            return Ok(FieldKey::Skill(index));
        }

        for section in ListSection::all() {
            let Some(rest) = s
                .strip_prefix(section.key())
                .and_then(|rest| rest.strip_prefix('.'))
            else {
                continue;
            };
            let (index, field) = rest
                .split_once('.')
                .ok_or_else(|| FieldKeyError::UnknownField(s.to_string()))?;
            let index = index
                .parse::<usize>()
                .map_err(|_| FieldKeyError::InvalidIndex(s.to_string()))?;
            let field = IndexedField::resolve(section, field)
                .ok_or_else(|| FieldKeyError::UnknownField(s.to_string()))?;
            return Ok(FieldKey::Indexed(field, index));
        }

        Err(FieldKeyError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Scalar(field) => f.write_str(field.key()),
            FieldKey::Indexed(field, index) => {
                write!(f, "{}.{}.{}", field.section().key(), index, field.field_name())
            }
            FieldKey::Skill(index) => write!(f, "skills.{}", index),
        }
    }
}
