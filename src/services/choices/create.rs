use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ChoiceService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    choices::{requests::CreateChoiceRequest, responses::ChoiceResponse},
};
use crate::services::materials::tree_cache;
use crate::services::questions::QuestionService;

pub async fn create_choice(
    service: &ChoiceService,
    choice_data: CreateChoiceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut errors: Vec<(&str, Vec<String>)> = Vec::new();

    if choice_data.text.trim().is_empty() {
        errors.push(("text", vec!["This field may not be blank.".to_string()]));
    }

    // 父引用必须指向已存在的题目，顺便解析所属资料
    let material_id = match storage.get_question_by_id(choice_data.question_id).await {
        Ok(Some(question)) => {
            match QuestionService::resolve_material_id(&storage, question.test_id).await {
                Ok(material_id) => material_id,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to resolve material: {e}"),
                        ),
                    ));
                }
            }
        }
        Ok(None) => {
            errors.push((
                "question_id",
                vec![format!(
                    "Question {} does not exist",
                    choice_data.question_id
                )],
            ));
            None
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to validate question: {e}"),
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

    match storage.create_choice(choice_data).await {
        Ok(choice) => {
            if let (Some(cache), Some(material_id)) = (service.get_cache(request), material_id) {
                tree_cache::evict(&cache, material_id).await;
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ChoiceResponse { choice },
                "选项创建成功",
            )))
        }
        Err(e) => {
            error!("Choice creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Choice creation failed: {e}"),
                )),
            )
        }
    }
}
