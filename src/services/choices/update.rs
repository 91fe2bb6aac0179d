use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ChoiceService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    choices::{requests::UpdateChoiceRequest, responses::ChoiceResponse},
};
use crate::services::materials::tree_cache;

pub async fn update_choice(
    service: &ChoiceService,
    choice_id: i64,
    update_data: UpdateChoiceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先取旧记录，既做 404 判断也用于缓存失效
    let existing = match storage.get_choice_by_id(choice_id).await {
        Ok(Some(choice)) => choice,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ChoiceNotFound,
                "Choice not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get choice: {e}"),
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

    // 若更新父引用，新的题目必须存在
    if let Some(question_id) = update_data.question_id {
        match storage.get_question_by_id(question_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                errors.push((
                    "question_id",
                    vec![format!("Question {question_id} does not exist")],
                ));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to validate question: {e}"),
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

    let new_question_id = update_data.question_id;

    match storage.update_choice(choice_id, update_data).await {
        Ok(Some(choice)) => {
            if let Some(cache) = service.get_cache(request) {
                // 原题目所属资料与（可能变更后的）新资料都要失效
                if let Ok(Some(material_id)) =
                    ChoiceService::resolve_material_id(&storage, existing.question_id).await
                {
                    tree_cache::evict(&cache, material_id).await;
                }
                if let Some(question_id) = new_question_id
                    && question_id != existing.question_id
                    && let Ok(Some(material_id)) =
                        ChoiceService::resolve_material_id(&storage, question_id).await
                {
                    tree_cache::evict(&cache, material_id).await;
                }
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ChoiceResponse { choice },
                "选项更新成功",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ChoiceNotFound,
            "Choice not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update choice: {e}"),
            )),
        ),
    }
}
