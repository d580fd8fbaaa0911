use actix_web::HttpResponse;
use tracing::error;

use crate::portfolio::application::ports::outgoing::RenderError;
use crate::shared::api::{ApiResponse, HtmlResponse};

/// Sends a rendered page, or a 500 envelope when rendering failed.
pub fn respond_with_page(page: &str, rendered: Result<String, RenderError>) -> HttpResponse {
    match rendered {
        Ok(body) => HtmlResponse::page(body),
        Err(e) => {
            error!(page, error = %e, "Page rendering failed");
            ApiResponse::internal_error()
        }
    }
}
