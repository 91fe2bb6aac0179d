use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ChoiceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::materials::tree_cache;

pub async fn delete_choice(
    service: &ChoiceService,
    choice_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 删除前解析所属资料，删除后要使其缓存失效
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

    match storage.delete_choice(choice_id).await {
        Ok(true) => {
            if let Some(cache) = service.get_cache(request)
                && let Ok(Some(material_id)) =
                    ChoiceService::resolve_material_id(&storage, existing.question_id).await
            {
                tree_cache::evict(&cache, material_id).await;
            }
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ChoiceNotFound,
            "Choice not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Choice deletion failed: {e}"),
            )),
        ),
    }
}
