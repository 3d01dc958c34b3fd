use crate::errors::ServerError;
use crate::templates;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into an HTML error page, logging server faults.
pub fn error_to_response(err: ServerError) -> Response {
    if err.status() >= 500 {
        tracing::error!(error = %err, "request failed");
    } else {
        tracing::debug!(error = %err, "request rejected");
    }
    templates::html_error_response(err)
}
