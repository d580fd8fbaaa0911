use actix_web::{get, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::portfolio::application::ports::incoming::use_cases::GetSinglePortfolioError;
use crate::portfolio::domain::{PortfolioId, PortfolioRecord};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolios/{id}",
    tag = "portfolios",
    params(("id" = Uuid, Path, description = "Portfolio id")),
    responses(
        (status = 200, description = "Portfolio found", body = inline(SuccessResponse<PortfolioRecord>)),
        (status = 404, description = "Portfolio not found", body = ErrorResponse)
    )
)]
#[get("/api/portfolios/{id}")]
pub async fn get_single_portfolio_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = PortfolioId::from(path.into_inner());

    match data.portfolio.get_single.execute(id).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_get_single_portfolio_error(err),
    }
}

fn map_get_single_portfolio_error(err: GetSinglePortfolioError) -> HttpResponse {
    match err {
        GetSinglePortfolioError::NotFound(_) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
    }
}
