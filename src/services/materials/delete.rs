use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{MaterialService, tree_cache};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_material(
    service: &MaterialService,
    material_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_material(material_id).await {
        Ok(true) => {
            if let Some(cache) = service.get_cache(request) {
                tree_cache::evict(&cache, material_id).await;
            }
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MaterialNotFound,
            "Material not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Material deletion failed: {e}"),
            )),
        ),
    }
}
