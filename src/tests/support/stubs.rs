use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetSinglePortfolioError, GetSinglePortfolioUseCase,
};
use crate::portfolio::application::ports::outgoing::{
    ListingView, PageRenderer, RenderError, TemplateSelectionView, WizardStepView,
};
use crate::portfolio::domain::{PortfolioId, PortfolioRecord};

//
// ──────────────────────────────────────────────────────────
// Page renderer
// ──────────────────────────────────────────────────────────
//

pub struct FailingPageRenderer;

impl FailingPageRenderer {
    fn fail(template: &str) -> Result<String, RenderError> {
        Err(RenderError::RenderFailed {
            template: template.to_string(),
            reason: "stubbed failure".to_string(),
        })
    }
}

impl PageRenderer for FailingPageRenderer {
    fn render_home(&self) -> Result<String, RenderError> {
        Self::fail("home.html")
    }

    fn render_template_selection(
        &self,
        _view: &TemplateSelectionView,
    ) -> Result<String, RenderError> {
        Self::fail("template_select.html")
    }

    fn render_wizard_step(&self, _view: &WizardStepView) -> Result<String, RenderError> {
        Self::fail("wizard.html")
    }

    fn render_listing(&self, _view: &ListingView) -> Result<String, RenderError> {
        Self::fail("professionals.html")
    }

    fn render_portfolio(&self, _record: &PortfolioRecord) -> Result<String, RenderError> {
        Self::fail("portfolio.html")
    }
}

//
// ──────────────────────────────────────────────────────────
// Get single portfolio
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubGetSinglePortfolioUseCase {
    pub result: Result<PortfolioRecord, GetSinglePortfolioError>,
}

impl StubGetSinglePortfolioUseCase {
    pub fn found(record: PortfolioRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSinglePortfolioError::NotFound(PortfolioId::generate())),
        }
    }
}

#[async_trait]
impl GetSinglePortfolioUseCase for StubGetSinglePortfolioUseCase {
    async fn execute(&self, id: PortfolioId) -> Result<PortfolioRecord, GetSinglePortfolioError> {
        match &self.result {
            Ok(record) => Ok(record.clone()),
            Err(_) => Err(GetSinglePortfolioError::NotFound(id)),
        }
    }
}
