use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnswerService;
use crate::models::{
    ApiResponse, ErrorCode,
    answers::requests::{AnswerListParams, AnswerListQuery},
};

pub async fn list_answers(
    service: &AnswerService,
    query: AnswerListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = AnswerListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        user_id: query.user,
        question_id: query.question,
        choice_id: query.choice,
        ordering: query.ordering,
    };

    match storage.list_answers_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Answer list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve answer list: {e}"),
            )),
        ),
    }
}
