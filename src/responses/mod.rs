pub mod errors;
pub mod html;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;

// Normal HTML response
pub use html::{css_response, html_response, html_response_with_status, redirect};
