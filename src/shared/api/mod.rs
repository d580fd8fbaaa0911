pub mod html;
pub mod json_config;
pub mod response;

pub use html::HtmlResponse;
pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
