pub mod page_renderer;
pub mod portfolio_store;
pub mod wizard_session_store;

pub use page_renderer::{
    ListingView, PageRenderer, PortfolioCard, RenderError, StepMarker, StepState,
    TemplateSelectionView, WizardStepView,
};
pub use portfolio_store::{PortfolioStore, PortfolioStoreError};
pub use wizard_session_store::{WizardId, WizardSessionError, WizardSessionStore};
