use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::health::HealthResponse;
use crate::portfolio::adapter::incoming::web::routes::PortfolioPayload;
use crate::portfolio::application::ports::incoming::use_cases::PortfolioListing;
use crate::portfolio::domain::{
    About, Blog, Contact, FilterFacets, Hero, PortfolioContent, PortfolioId, PortfolioRecord,
    Project, Service, Social, TemplateDescriptor, TemplateKind, Testimonial,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Builder API",
        version = "1.0.0",
        description = "JSON API over the portfolio store and template catalog",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Health
        crate::health::health,

        // Template endpoints
        crate::portfolio::adapter::incoming::web::routes::get_templates::get_templates_handler,

        // Portfolio endpoints
        crate::portfolio::adapter::incoming::web::routes::get_portfolios::get_portfolios_handler,
        crate::portfolio::adapter::incoming::web::routes::get_single_portfolio::get_single_portfolio_handler,
        crate::portfolio::adapter::incoming::web::routes::create_portfolio::create_portfolio_handler,
        crate::portfolio::adapter::incoming::web::routes::update_portfolio::update_portfolio_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            HealthResponse,

            // Portfolio
            PortfolioId,
            PortfolioRecord,
            PortfolioContent,
            PortfolioPayload,
            PortfolioListing,
            FilterFacets,
            Hero,
            About,
            Social,
            Service,
            Project,
            Testimonial,
            Blog,
            Contact,

            // Templates
            TemplateKind,
            TemplateDescriptor
        )
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "portfolios", description = "Portfolio storage and listing endpoints"),
        (name = "templates", description = "Template catalog endpoints"),
    )
)]
pub struct ApiDoc;
