use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AnswerService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    answers::{requests::CreateAnswerRequest, responses::AnswerResponse},
};

pub async fn create_answer(
    service: &AnswerService,
    answer_data: CreateAnswerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 三个引用逐个校验存在性。选项是否属于该题目不做校验，
    // 记录的就是用户提交的组合
    let mut errors: Vec<(&str, Vec<String>)> = Vec::new();

    match storage.get_user_by_id(answer_data.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            errors.push((
                "user_id",
                vec![format!("User {} does not exist", answer_data.user_id)],
            ));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to validate user: {e}"),
                )),
            );
        }
    }

    match storage.get_question_by_id(answer_data.question_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            errors.push((
                "question_id",
                vec![format!(
                    "Question {} does not exist",
                    answer_data.question_id
                )],
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

    match storage.get_choice_by_id(answer_data.choice_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            errors.push((
                "choice_id",
                vec![format!("Choice {} does not exist", answer_data.choice_id)],
            ));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to validate choice: {e}"),
                )),
            );
        }
    }

    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            field_errors(errors),
            "Validation failed",
        )));
    }

    match storage.create_answer(answer_data).await {
        Ok(answer) => Ok(HttpResponse::Created().json(ApiResponse::success(
            AnswerResponse { answer },
            "答题记录创建成功",
        ))),
        Err(e) => {
            error!("Answer creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Answer creation failed: {e}"),
                )),
            )
        }
    }
}
