pub mod in_memory_portfolio_store;
pub mod in_memory_wizard_session_store;
pub mod minijinja_page_renderer;

pub use in_memory_portfolio_store::InMemoryPortfolioStore;
pub use in_memory_wizard_session_store::InMemoryWizardSessionStore;
pub use minijinja_page_renderer::MinijinjaPageRenderer;
