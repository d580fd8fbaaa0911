use serde::Serialize;

use crate::portfolio::application::ports::outgoing::WizardId;
use crate::portfolio::domain::{
    FilterFacets, PortfolioContent, PortfolioFilter, PortfolioId, PortfolioRecord,
    PortfolioWizard, TemplateDescriptor, TemplateKind, WizardStep,
};

//
// ──────────────────────────────────────────────────────────
// View models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct TemplateSelectionView {
    pub templates: Vec<TemplateDescriptor>,
    pub selected: Option<TemplateKind>,
    pub editing: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepMarker {
    pub number: usize,
    pub title: &'static str,
    pub state: StepState,
}

#[derive(Debug, Clone, Serialize)]
pub struct WizardStepView {
    pub wizard_id: WizardId,
    pub template: TemplateKind,
    pub step: WizardStep,
    pub step_title: &'static str,
    pub steps: Vec<StepMarker>,
    pub draft: PortfolioContent,
    pub is_first: bool,
    pub is_last: bool,
    pub editing: bool,
}

impl WizardStepView {
    pub fn new(wizard_id: WizardId, wizard: &PortfolioWizard) -> Self {
        let current = wizard.step();
        let steps = WizardStep::ALL
            .iter()
            .map(|step| StepMarker {
                number: step.index() + 1,
                title: step.title(),
                state: match step.cmp(&current) {
                    std::cmp::Ordering::Less => StepState::Completed,
                    std::cmp::Ordering::Equal => StepState::Active,
                    std::cmp::Ordering::Greater => StepState::Pending,
                },
            })
            .collect();

        Self {
            wizard_id,
            template: wizard.template(),
            step: current,
            step_title: current.title(),
            steps,
            draft: wizard.draft().clone(),
            is_first: current == WizardStep::FIRST,
            is_last: wizard.is_last_step(),
            editing: wizard.is_editing(),
        }
    }
}

const CARD_SKILL_PREVIEW: usize = 3;

/// One entry of the professionals listing.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioCard {
    pub id: PortfolioId,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub profile_image_url: String,
    pub skills_preview: Vec<String>,
    pub more_skills: usize,
}

impl From<&PortfolioRecord> for PortfolioCard {
    fn from(record: &PortfolioRecord) -> Self {
        let content = &record.content;
        Self {
            id: record.id,
            name: content.hero.name.clone(),
            title: content.hero.title.clone(),
            bio: content.about.bio.clone(),
            location: content.about.location.clone(),
            email: content.about.email.clone(),
            phone: content.about.phone.clone(),
            profile_image_url: content.hero.profile_image_url.clone(),
            skills_preview: content
                .skills
                .iter()
                .take(CARD_SKILL_PREVIEW)
                .cloned()
                .collect(),
            more_skills: content.skills.len().saturating_sub(CARD_SKILL_PREVIEW),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    pub cards: Vec<PortfolioCard>,
    pub query: String,
    pub role: String,
    pub skill: String,
    pub facets: FilterFacets,
}

impl ListingView {
    pub fn new(records: &[PortfolioRecord], filter: &PortfolioFilter, facets: FilterFacets) -> Self {
        Self {
            cards: records.iter().map(PortfolioCard::from).collect(),
            query: filter.query.clone(),
            role: filter.role.clone(),
            skill: filter.skill.clone(),
            facets,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to load template '{template}': {reason}")]
    TemplateMissing { template: String, reason: String },

    #[error("Failed to render template '{template}': {reason}")]
    RenderFailed { template: String, reason: String },
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Turns view models into HTML documents. Implementations are pure: the same
/// input always yields the same page.
pub trait PageRenderer: Send + Sync {
    fn render_home(&self) -> Result<String, RenderError>;

    fn render_template_selection(&self, view: &TemplateSelectionView)
        -> Result<String, RenderError>;

    fn render_wizard_step(&self, view: &WizardStepView) -> Result<String, RenderError>;

    fn render_listing(&self, view: &ListingView) -> Result<String, RenderError>;

    /// Renders a stored portfolio with the layout named by `record.template`.
    fn render_portfolio(&self, record: &PortfolioRecord) -> Result<String, RenderError>;
}
