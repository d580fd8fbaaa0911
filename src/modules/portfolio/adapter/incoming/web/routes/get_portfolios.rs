use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::portfolio::application::ports::incoming::use_cases::PortfolioListing;
use crate::portfolio::domain::PortfolioFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolios",
    tag = "portfolios",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive match on name, title or bio"),
        ("role" = Option<String>, Query, description = "Exact professional title"),
        ("skill" = Option<String>, Query, description = "Exact skill")
    ),
    responses(
        (status = 200, description = "Matching portfolios plus facet values", body = inline(SuccessResponse<PortfolioListing>))
    )
)]
#[get("/api/portfolios")]
pub async fn get_portfolios_handler(
    query: web::Query<PortfolioFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    let listing = data.portfolio.get_list.execute(&query.into_inner()).await;
    ApiResponse::success(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::portfolio::application::ports::outgoing::PortfolioStore;
    use crate::portfolio::domain::TemplateKind;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, portfolio_fixtures::sample_record,
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn filters_by_query_role_and_skill() {
        // Arrange
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        store
            .add(sample_record("Jane", "Designer", &["Figma"], TemplateKind::Modern))
            .await;
        store
            .add(sample_record("Jon", "Engineer", &["Rust"], TemplateKind::Classic))
            .await;
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(get_portfolios_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::get()
            .uri("/api/portfolios?q=jo&role=Engineer")
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        let records = json["data"]["records"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["hero"]["name"], "Jon");
        assert_eq!(records[0]["template"], "classic");
        assert_eq!(
            json["data"]["facets"]["roles"],
            serde_json::json!(["Designer", "Engineer"])
        );
    }

    #[actix_web::test]
    async fn empty_store_returns_empty_list() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(get_portfolios_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/api/portfolios").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        let json = read_json(resp).await;
        assert_eq!(json["data"]["records"], serde_json::json!([]));
    }
}
