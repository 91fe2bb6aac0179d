use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::materials::tree_cache;

pub async fn delete_question(
    service: &QuestionService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 删除前解析所属资料，删除后要使其缓存失效
    let existing = match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "Question not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get question: {e}"),
                )),
            );
        }
    };

    match storage.delete_question(question_id).await {
        Ok(true) => {
            if let Some(cache) = service.get_cache(request)
                && let Ok(Some(material_id)) =
                    QuestionService::resolve_material_id(&storage, existing.test_id).await
            {
                tree_cache::evict(&cache, material_id).await;
            }
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "Question not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Question deletion failed: {e}"),
            )),
        ),
    }
}
