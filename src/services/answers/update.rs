use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnswerService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    answers::{requests::UpdateAnswerRequest, responses::AnswerResponse},
};

pub async fn update_answer(
    service: &AnswerService,
    answer_id: i64,
    update_data: UpdateAnswerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 被更新的引用逐个校验存在性
    let mut errors: Vec<(&str, Vec<String>)> = Vec::new();

    if let Some(user_id) = update_data.user_id {
        match storage.get_user_by_id(user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                errors.push(("user_id", vec![format!("User {user_id} does not exist")]));
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
    }

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

    if let Some(choice_id) = update_data.choice_id {
        match storage.get_choice_by_id(choice_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                errors.push((
                    "choice_id",
                    vec![format!("Choice {choice_id} does not exist")],
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
    }

    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            field_errors(errors),
            "Validation failed",
        )));
    }

    match storage.update_answer(answer_id, update_data).await {
        Ok(Some(answer)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AnswerResponse { answer },
            "答题记录更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnswerNotFound,
            "Answer not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update answer: {e}"),
            )),
        ),
    }
}
