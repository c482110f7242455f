// errors.rs
use crate::forms::FormError;
use astra::Response;
use thiserror::Error;

/// Errors a route handler can end in. Rendered as an HTML error page by
/// `responses::error_to_response`.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

impl From<FormError> for ServerError {
    fn from(err: FormError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}
