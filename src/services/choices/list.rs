use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ChoiceService;
use crate::models::{
    ApiResponse, ErrorCode,
    choices::requests::{ChoiceListParams, ChoiceListQuery},
};

pub async fn list_choices(
    service: &ChoiceService,
    query: ChoiceListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = ChoiceListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        question_id: query.question,
        is_correct: query.is_correct,
        ordering: query.ordering,
    };

    match storage.list_choices_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Choice list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve choice list: {e}"),
            )),
        ),
    }
}
