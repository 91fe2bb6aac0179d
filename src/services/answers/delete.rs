use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnswerService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_answer(
    service: &AnswerService,
    answer_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_answer(answer_id).await {
        Ok(true) => Ok(HttpResponse::NoContent().finish()),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnswerNotFound,
            "Answer not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Answer deletion failed: {e}"),
            )),
        ),
    }
}
