pub mod create_portfolio;
pub mod edit_selection;
pub mod get_portfolios;
pub mod get_single_portfolio;
pub mod portfolio_wizard;
pub mod update_portfolio;

pub use create_portfolio::CreatePortfolioUseCase;
pub use edit_selection::{EditSelectionError, EditSelectionUseCase};
pub use get_portfolios::{GetPortfoliosUseCase, PortfolioListing};
pub use get_single_portfolio::{GetSinglePortfolioError, GetSinglePortfolioUseCase};
pub use portfolio_wizard::{
    PortfolioWizardError, PortfolioWizardUseCase, WizardAction, WizardOutcome,
};
pub use update_portfolio::{UpdatePortfolioError, UpdatePortfolioUseCase};
