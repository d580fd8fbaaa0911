use actix_web::{get, Responder};

use crate::api::schemas::SuccessResponse;
use crate::portfolio::domain::{template_catalog, TemplateDescriptor};
use crate::shared::api::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/templates",
    tag = "templates",
    responses(
        (status = 200, description = "Available portfolio templates", body = inline(SuccessResponse<Vec<TemplateDescriptor>>))
    )
)]
#[get("/api/templates")]
pub async fn get_templates_handler() -> impl Responder {
    ApiResponse::success(template_catalog())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn returns_catalog_in_order() {
        // Arrange
        let app = test::init_service(App::new().service(get_templates_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0]["kind"], "modern");
        assert_eq!(json["data"][1]["kind"], "classic");
        assert_eq!(json["data"][1]["name"], "Classic Portfolio");
        assert_eq!(json["data"][0]["features"].as_array().unwrap().len(), 4);
    }
}
