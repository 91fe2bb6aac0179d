use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::models::tests::responses::TestResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_test(
    service: &TestService,
    test_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_test_detail(test_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TestResponse { test: detail },
            "Test retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "Test not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get test: {e}"),
            )),
        ),
    }
}
