//! Results to HTTP responses

use crate::core::insights::ReportResult;
use crate::core::inventory::UpdateOutcome;
use actix_web::HttpResponse;
use actix_web::http::StatusCode;

/// A bulk update always succeeds as a whole; rejections are inside the body.
pub fn outcomes_response(outcomes: &[UpdateOutcome]) -> HttpResponse {
    HttpResponse::Accepted().json(outcomes)
}

pub fn report_response(result: &ReportResult) -> HttpResponse {
    let status =
        StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(&result.message)
}
