use actix_web::{get, web, Responder};

use crate::portfolio::adapter::incoming::web::page::respond_with_page;
use crate::portfolio::application::ports::outgoing::ListingView;
use crate::portfolio::domain::PortfolioFilter;
use crate::AppState;

/// Browsable listing with free-text search plus role and skill facets.
#[get("/professionals")]
pub async fn professionals_handler(
    query: web::Query<PortfolioFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.portfolio.edit_selection.clear().await;

    let filter = query.into_inner();
    let listing = data.portfolio.get_list.execute(&filter).await;
    let view = ListingView::new(&listing.records, &filter, listing.facets);

    respond_with_page("professionals", data.renderer.render_listing(&view))
}
