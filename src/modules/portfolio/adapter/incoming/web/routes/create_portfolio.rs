use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::portfolio::domain::{PortfolioContent, PortfolioRecord, TemplateKind};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Body of create and replace requests: a template plus the full content,
/// laid out flat like a stored record minus its id.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PortfolioPayload {
    pub template: TemplateKind,
    #[serde(flatten)]
    pub content: PortfolioContent,
}

#[utoipa::path(
    post,
    path = "/api/portfolios",
    tag = "portfolios",
    request_body = PortfolioPayload,
    responses(
        (status = 201, description = "Portfolio created", body = inline(SuccessResponse<PortfolioRecord>)),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    )
)]
#[post("/api/portfolios")]
pub async fn create_portfolio_handler(
    payload: web::Json<PortfolioPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let PortfolioPayload { template, content } = payload.into_inner();
    let record = data.portfolio.create.execute(template, content).await;
    info!(portfolio_id = %record.id, %template, "Portfolio created via API");
    ApiResponse::created(record)
}
