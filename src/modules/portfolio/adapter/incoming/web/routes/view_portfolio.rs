use actix_web::{get, post, web, Responder};
use tracing::info;

use crate::portfolio::adapter::incoming::web::page::respond_with_page;
use crate::portfolio::application::ports::incoming::use_cases::EditSelectionError;
use crate::portfolio::domain::PortfolioId;
use crate::shared::api::HtmlResponse;
use crate::AppState;

/// Selects the record as "currently editing" and renders it with its own
/// template. Unknown ids fall back to the listing.
#[get("/portfolio/{id}")]
pub async fn view_portfolio_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = path.parse::<PortfolioId>() else {
        return HtmlResponse::redirect("/professionals");
    };

    match data.portfolio.edit_selection.select(id).await {
        Ok(record) => respond_with_page("portfolio", data.renderer.render_portfolio(&record)),
        Err(EditSelectionError::NotFound(_)) => HtmlResponse::redirect("/professionals"),
    }
}

#[post("/portfolio/{id}/edit")]
pub async fn edit_portfolio_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = path.parse::<PortfolioId>() else {
        return HtmlResponse::redirect("/professionals");
    };

    match data.portfolio.edit_selection.select(id).await {
        Ok(_) => {
            info!(portfolio_id = %id, "Portfolio selected for editing");
            HtmlResponse::redirect("/create")
        }
        Err(EditSelectionError::NotFound(_)) => HtmlResponse::redirect("/professionals"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test, App};

    use crate::portfolio::application::ports::outgoing::PortfolioStore;
    use crate::portfolio::domain::TemplateKind;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, portfolio_fixtures::sample_record,
    };

    fn location(resp: &actix_web::dev::ServiceResponse) -> String {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    // ============================================================
    // GET /portfolio/{id}
    // ============================================================

    #[actix_web::test]
    async fn renders_with_record_template_and_selects_it() {
        // Arrange
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let record = sample_record("Jane", "Engineer", &["Rust"], TemplateKind::Classic);
        store.add(record.clone()).await;
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(view_portfolio_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::get()
            .uri(&format!("/portfolio/{}", record.id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("class=\"classic\""));
        assert!(html.contains("Jane"));
        assert_eq!(store.current().await, Some(record));
    }

    #[actix_web::test]
    async fn viewing_another_record_moves_selection() {
        // Arrange
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let first = sample_record("Jane", "Engineer", &[], TemplateKind::Modern);
        let second = sample_record("Jon", "Designer", &[], TemplateKind::Classic);
        store.add(first.clone()).await;
        store.add(second.clone()).await;
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(view_portfolio_handler),
        )
        .await;

        // Act
        for record in [&first, &second] {
            let req = test::TestRequest::get()
                .uri(&format!("/portfolio/{}", record.id))
                .to_request();
            test::call_service(&app, req).await;
        }

        // Assert
        assert_eq!(store.current().await, Some(second));
    }

    #[actix_web::test]
    async fn unknown_or_malformed_id_redirects_to_listing() {
        // Arrange
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(view_portfolio_handler),
        )
        .await;

        for uri in [
            format!("/portfolio/{}", PortfolioId::generate()),
            "/portfolio/42".to_string(),
        ] {
            // Act
            let req = test::TestRequest::get().uri(&uri).to_request();
            let resp = test::call_service(&app, req).await;

            // Assert
            assert_eq!(resp.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&resp), "/professionals");
        }
        assert_eq!(store.current().await, None);
    }

    // ============================================================
    // POST /portfolio/{id}/edit
    // ============================================================

    #[actix_web::test]
    async fn edit_sets_current_and_redirects_to_create() {
        // Arrange
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let record = sample_record("Jane", "Engineer", &[], TemplateKind::Modern);
        store.add(record.clone()).await;
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(edit_portfolio_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::post()
            .uri(&format!("/portfolio/{}/edit", record.id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/create");
        assert_eq!(store.current().await, Some(record));
    }

    #[actix_web::test]
    async fn edit_unknown_id_redirects_to_listing() {
        // Arrange
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(edit_portfolio_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::post()
            .uri(&format!("/portfolio/{}/edit", PortfolioId::generate()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(location(&resp), "/professionals");
        assert_eq!(store.current().await, None);
    }
}
