use actix_web::{put, web, HttpResponse, Responder};
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::portfolio::adapter::incoming::web::routes::create_portfolio::PortfolioPayload;
use crate::portfolio::application::ports::incoming::use_cases::UpdatePortfolioError;
use crate::portfolio::domain::{PortfolioId, PortfolioRecord};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/portfolios/{id}",
    tag = "portfolios",
    params(("id" = Uuid, Path, description = "Portfolio id")),
    request_body = PortfolioPayload,
    responses(
        (status = 200, description = "Portfolio replaced", body = inline(SuccessResponse<PortfolioRecord>)),
        (status = 404, description = "Portfolio not found", body = ErrorResponse)
    )
)]
#[put("/api/portfolios/{id}")]
pub async fn update_portfolio_handler(
    path: web::Path<Uuid>,
    payload: web::Json<PortfolioPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = PortfolioId::from(path.into_inner());
    let PortfolioPayload { template, content } = payload.into_inner();

    match data.portfolio.update.execute(id, template, content).await {
        Ok(record) => {
            info!(portfolio_id = %id, "Portfolio replaced via API");
            ApiResponse::success(record)
        }
        Err(err) => map_update_portfolio_error(err),
    }
}

fn map_update_portfolio_error(err: UpdatePortfolioError) -> HttpResponse {
    match err {
        UpdatePortfolioError::NotFound(id) => {
            warn!(portfolio_id = %id, "Update of unknown portfolio");
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
    }
}
