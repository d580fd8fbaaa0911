use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{info, warn};

use crate::portfolio::adapter::incoming::web::page::respond_with_page;
use crate::portfolio::application::ports::outgoing::TemplateSelectionView;
use crate::portfolio::domain::{template_catalog, TemplateKind};
use crate::shared::api::HtmlResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TemplateChoice {
    pub template: String,
}

/// Entry to the create flow. While a portfolio is being edited the template
/// step is skipped and a seeded wizard opens straight away.
#[get("/create")]
pub async fn create_page_handler(data: web::Data<AppState>) -> impl Responder {
    if let Some(wizard_id) = data.portfolio.wizard.resume_editing().await {
        return HtmlResponse::redirect(&format!("/create/{}", wizard_id));
    }
    render_template_selection(&data).await
}

/// Template selection even while editing, for switching layouts.
#[get("/create/templates")]
pub async fn template_selection_handler(data: web::Data<AppState>) -> impl Responder {
    render_template_selection(&data).await
}

#[post("/create")]
pub async fn start_wizard_handler(
    data: web::Data<AppState>,
    form: web::Form<TemplateChoice>,
) -> impl Responder {
    let template = match form.template.parse::<TemplateKind>() {
        Ok(template) => template,
        Err(e) => {
            warn!(template = %form.template, "Wizard start rejected: unknown template");
            return HtmlResponse::bad_request(&e.to_string());
        }
    };

    let wizard_id = data.portfolio.wizard.start(template).await;
    info!(%wizard_id, %template, "Wizard started");
    HtmlResponse::redirect(&format!("/create/{}", wizard_id))
}

async fn render_template_selection(data: &AppState) -> HttpResponse {
    let current = data.portfolio.edit_selection.current().await;
    let view = TemplateSelectionView {
        templates: template_catalog(),
        selected: current.as_ref().map(|record| record.template),
        editing: current.is_some(),
    };
    respond_with_page("template_selection", data.renderer.render_template_selection(&view))
}
