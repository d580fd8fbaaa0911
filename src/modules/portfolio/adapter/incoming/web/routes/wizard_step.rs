use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::{info, warn};

use crate::portfolio::adapter::incoming::web::form_fields::WizardForm;
use crate::portfolio::adapter::incoming::web::page::respond_with_page;
use crate::portfolio::application::ports::incoming::use_cases::{
    PortfolioWizardError, WizardOutcome,
};
use crate::portfolio::application::ports::outgoing::{WizardId, WizardStepView};
use crate::shared::api::HtmlResponse;
use crate::AppState;

#[get("/create/{wizard_id}")]
pub async fn get_wizard_step_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(wizard_id) = path.parse::<WizardId>() else {
        return HtmlResponse::redirect("/create");
    };

    match data.portfolio.wizard.get(wizard_id).await {
        Ok(wizard) => respond_with_page(
            "wizard",
            data.renderer
                .render_wizard_step(&WizardStepView::new(wizard_id, &wizard)),
        ),
        Err(err) => map_wizard_error(err),
    }
}

/// Applies the posted fields, then the clicked action, and redirects back to
/// the step (or to the listing after submit).
#[post("/create/{wizard_id}")]
pub async fn post_wizard_step_handler(
    path: web::Path<String>,
    form: web::Form<Vec<(String, String)>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(wizard_id) = path.parse::<WizardId>() else {
        return HtmlResponse::redirect("/create");
    };

    let form = match WizardForm::parse(form.into_inner()) {
        Ok(form) => form,
        Err(e) => {
            warn!(%wizard_id, error = %e, "Wizard post rejected");
            return HtmlResponse::bad_request(&e.to_string());
        }
    };

    match data
        .portfolio
        .wizard
        .advance(wizard_id, form.edits, form.action)
        .await
    {
        Ok(WizardOutcome::InProgress(_)) => {
            HtmlResponse::redirect(&format!("/create/{}", wizard_id))
        }
        Ok(WizardOutcome::Submitted(record)) => {
            info!(%wizard_id, portfolio_id = %record.id, "Wizard submitted");
            HtmlResponse::redirect("/professionals")
        }
        Err(err) => map_wizard_error(err),
    }
}

fn map_wizard_error(err: PortfolioWizardError) -> HttpResponse {
    match err {
        PortfolioWizardError::SessionNotFound(_) => HtmlResponse::redirect("/create"),
        PortfolioWizardError::PortfolioNotFound(id) => {
            warn!(portfolio_id = %id, "Edited portfolio vanished before submit");
            HtmlResponse::redirect("/professionals")
        }
        PortfolioWizardError::Rejected(e) => {
            warn!(error = %e, "Wizard step rejected");
            HtmlResponse::bad_request(&e.to_string())
        }
    }
}
