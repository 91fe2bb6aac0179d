use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::materials::tree_cache;

pub async fn delete_test(
    service: &TestService,
    test_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 删除前解析所属资料，删除后要使其缓存失效
    let existing = match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => test,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestNotFound,
                "Test not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get test: {e}"),
                )),
            );
        }
    };

    match storage.delete_test(test_id).await {
        Ok(true) => {
            if let Some(cache) = service.get_cache(request) {
                tree_cache::evict(&cache, existing.material_id).await;
            }
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "Test not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Test deletion failed: {e}"),
            )),
        ),
    }
}
