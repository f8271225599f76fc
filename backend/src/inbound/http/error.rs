//! Rendering of domain errors as HTTP responses.
//!
//! Every error body has the shape `{code, message, traceId?, details?}`.
//! Internal errors keep their code and trace id but lose their message and
//! details, which are logged instead. Unavailable backends are logged at
//! `warn` so outages show up without the client seeing adapter text.

use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode};
use crate::middleware::TRACE_ID_HEADER;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Body sent to the client for `error`.
fn client_view(error: &Error) -> Error {
    match error.code() {
        ErrorCode::InternalError => {
            error!(
                message = error.message(),
                trace_id = error.trace_id(),
                "internal error"
            );
            let redacted = Error::internal(INTERNAL_MESSAGE);
            match error.trace_id() {
                Some(id) => redacted.with_trace_id(id.to_owned()),
                None => redacted,
            }
        }
        ErrorCode::ServiceUnavailable => {
            warn!(
                message = error.message(),
                trace_id = error.trace_id(),
                "backend unavailable"
            );
            error.clone()
        }
        _ => error.clone(),
    }
}

fn with_trace_header(builder: &mut HttpResponseBuilder, error: &Error) {
    if let Some(id) = error.trace_id() {
        builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        with_trace_header(&mut builder, self);
        builder.json(client_view(self))
    }
}
