use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    questions::{requests::UpdateQuestionRequest, responses::QuestionResponse},
};
use crate::services::materials::tree_cache;

pub async fn update_question(
    service: &QuestionService,
    question_id: i64,
    update_data: UpdateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先取旧记录，既做 404 判断也用于缓存失效
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

    let mut errors: Vec<(&str, Vec<String>)> = Vec::new();

    if let Some(ref text) = update_data.text
        && text.trim().is_empty()
    {
        errors.push(("text", vec!["This field may not be blank.".to_string()]));
    }

    // 若更新父引用，新的测验必须存在
    let mut new_material_id = None;
    if let Some(test_id) = update_data.test_id {
        match storage.get_test_by_id(test_id).await {
            Ok(Some(test)) => new_material_id = Some(test.material_id),
            Ok(None) => {
                errors.push(("test_id", vec![format!("Test {test_id} does not exist")]));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to validate test: {e}"),
                    )),
                );
            }
        }
    }

    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            field_errors(errors),
            "Validation failed",
        )));
    }

    match storage.update_question(question_id, update_data).await {
        Ok(Some(_)) => {
            if let Some(cache) = service.get_cache(request) {
                // 原测验所属资料与（可能变更后的）新资料都要失效
                if let Ok(Some(material_id)) =
                    QuestionService::resolve_material_id(&storage, existing.test_id).await
                {
                    tree_cache::evict(&cache, material_id).await;
                }
                if let Some(material_id) = new_material_id {
                    tree_cache::evict(&cache, material_id).await;
                }
            }

            // 更新成功后按嵌套表示返回
            match storage.get_question_detail(question_id).await {
                Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                    QuestionResponse { question: detail },
                    "题目更新成功",
                ))),
                Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::QuestionNotFound,
                    "Question not found",
                ))),
                Err(e) => Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to get question: {e}"),
                    )),
                ),
            }
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "Question not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update question: {e}"),
            )),
        ),
    }
}
