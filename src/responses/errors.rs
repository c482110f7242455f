use crate::errors::ServerError;
use crate::templates::components::error_page;
use crate::templates::PageContext;
use astra::{Body, Response, ResponseBuilder};
use tracing::warn;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError, ctx: &PageContext) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Page not found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::InternalError => "Internal Server Error".to_string(),
    };
    if status >= 500 {
        warn!(status, path = %ctx.path, "request failed: {err}");
    }

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message, ctx).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
