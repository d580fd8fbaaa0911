// src/shared/api/html.rs
use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};

/// Helpers for the server-rendered pages, alongside `ApiResponse` for JSON.
pub struct HtmlResponse;

impl HtmlResponse {
    pub fn page(body: String) -> HttpResponse {
        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body)
    }

    /// 303 so a browser follows a form post with a GET.
    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish()
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(message.to_string())
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_is_see_other_with_location() {
        let resp = HtmlResponse::redirect("/professionals");

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/professionals"
        );
    }

    #[test]
    fn page_is_html() {
        let resp = HtmlResponse::page("<p>hi</p>".to_string());

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
