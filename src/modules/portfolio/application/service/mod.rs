pub mod create_portfolio_service;
pub mod edit_selection_service;
pub mod get_portfolios_service;
pub mod get_single_portfolio_service;
pub mod portfolio_wizard_service;
pub mod update_portfolio_service;

pub use create_portfolio_service::CreatePortfolioService;
pub use edit_selection_service::EditSelectionService;
pub use get_portfolios_service::GetPortfoliosService;
pub use get_single_portfolio_service::GetSinglePortfolioService;
pub use portfolio_wizard_service::PortfolioWizardService;
pub use update_portfolio_service::UpdatePortfolioService;
