use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::warn;

/// Largest accepted JSON body. A full portfolio is a few kilobytes of text.
pub const JSON_PAYLOAD_LIMIT: usize = 256 * 1024;

/// JSON extractor settings for the API: bodies over [`JSON_PAYLOAD_LIMIT`],
/// malformed JSON and unknown enum values (such as a template name) all
/// answer `400 VALIDATION_ERROR` in the usual envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, req| {
            let message = format!("Invalid JSON body: {err}");
            warn!(path = %req.path(), error = %err, "JSON body rejected");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
