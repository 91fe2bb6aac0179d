use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::QuestionService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    questions::{
        requests::CreateQuestionRequest,
        responses::{QuestionDetail, QuestionResponse},
    },
};
use crate::services::materials::tree_cache;

pub async fn create_question(
    service: &QuestionService,
    question_data: CreateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut errors: Vec<(&str, Vec<String>)> = Vec::new();

    if question_data.text.trim().is_empty() {
        errors.push(("text", vec!["This field may not be blank.".to_string()]));
    }

    // 父引用必须指向已存在的测验，顺便解析所属资料
    let material_id = match storage.get_test_by_id(question_data.test_id).await {
        Ok(Some(test)) => Some(test.material_id),
        Ok(None) => {
            errors.push((
                "test_id",
                vec![format!("Test {} does not exist", question_data.test_id)],
            ));
            None
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to validate test: {e}"),
                )),
            );
        }
    };

    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            field_errors(errors),
            "Validation failed",
        )));
    }

    match storage.create_question(question_data).await {
        Ok(question) => {
            if let (Some(cache), Some(material_id)) = (service.get_cache(request), material_id) {
                tree_cache::evict(&cache, material_id).await;
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(
                QuestionResponse {
                    // 新建题目还没有任何选项
                    question: QuestionDetail {
                        question,
                        choices: Vec::new(),
                    },
                },
                "题目创建成功",
            )))
        }
        Err(e) => {
            error!("Question creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Question creation failed: {e}"),
                )),
            )
        }
    }
}
