use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ChoiceService;
use crate::models::choices::responses::ChoiceResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_choice(
    service: &ChoiceService,
    choice_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_choice_by_id(choice_id).await {
        Ok(Some(choice)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ChoiceResponse { choice },
            "Choice retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ChoiceNotFound,
            "Choice not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get choice: {e}"),
            )),
        ),
    }
}
