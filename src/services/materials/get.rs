use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{MaterialService, tree_cache};
use crate::models::materials::responses::MaterialResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_material(
    service: &MaterialService,
    material_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let cache = service.get_cache(request);

    // 先查嵌套树缓存
    if let Some(ref cache) = cache
        && let Some(detail) = tree_cache::lookup(cache, material_id).await
    {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            serde_json::json!({ "material": detail }),
            "Material retrieved successfully",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_material_detail(material_id).await {
        Ok(Some(detail)) => {
            if let Some(ref cache) = cache {
                tree_cache::store(cache, &detail).await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MaterialResponse { material: detail },
                "Material retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MaterialNotFound,
            "Material not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get material: {e}"),
            )),
        ),
    }
}
