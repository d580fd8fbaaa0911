pub mod create_portfolio;
pub mod get_portfolios;
pub mod get_single_portfolio;
pub mod get_templates;
pub mod home;
pub mod professionals;
pub mod template_selection;
pub mod update_portfolio;
pub mod view_portfolio;
pub mod wizard_step;

// Pages
pub use home::home_handler;
pub use professionals::professionals_handler;
pub use template_selection::{
    create_page_handler, start_wizard_handler, template_selection_handler,
};
pub use view_portfolio::{edit_portfolio_handler, view_portfolio_handler};
pub use wizard_step::{get_wizard_step_handler, post_wizard_step_handler};

// JSON API
pub use create_portfolio::{create_portfolio_handler, PortfolioPayload};
pub use get_portfolios::get_portfolios_handler;
pub use get_single_portfolio::get_single_portfolio_handler;
pub use get_templates::get_templates_handler;
pub use update_portfolio::update_portfolio_handler;
