use crate::error::HandlerError;
use lambda_http::http::StatusCode;
use lambda_http::{Error, Response};
use serde::Serialize;
use serde_json::json;

pub fn json_response(
    status: &StatusCode,
    body: &impl Serialize,
) -> Result<Response<String>, Error> {
    let body = serde_json::to_string(body)?;
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(body)
        .map_err(Box::new)?;

    Ok(response)
}

/// Every handler failure maps to a 500 carrying the diagnostic text.
pub fn error_response(error: &HandlerError) -> Result<Response<String>, Error> {
    json_response(
        &StatusCode::INTERNAL_SERVER_ERROR,
        &json!({ "error": error.message() }),
    )
}
