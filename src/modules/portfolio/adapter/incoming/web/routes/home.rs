use actix_web::{get, web, Responder};

use crate::portfolio::adapter::incoming::web::page::respond_with_page;
use crate::AppState;

/// Landing page. Visiting it abandons any pending edit.
#[get("/")]
pub async fn home_handler(data: web::Data<AppState>) -> impl Responder {
    data.portfolio.edit_selection.clear().await;
    respond_with_page("home", data.renderer.render_home())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::portfolio::application::ports::outgoing::PortfolioStore;
    use crate::portfolio::domain::TemplateKind;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, portfolio_fixtures::sample_record,
        stubs::FailingPageRenderer,
    };

    #[actix_web::test]
    async fn home_renders_and_clears_current() {
        // Arrange
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        store
            .set_current(Some(sample_record("Jane", "Engineer", &[], TemplateKind::Modern)))
            .await;
        let app =
            test::init_service(App::new().app_data(builder.build()).service(home_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("Create Your Perfect Portfolio"));
        assert_eq!(store.current().await, None);
    }

    #[actix_web::test]
    async fn render_failure_returns_internal_error() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_renderer(FailingPageRenderer)
            .build();
        let app = test::init_service(App::new().app_data(state).service(home_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
