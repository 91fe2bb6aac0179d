use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::materials::tree_cache;

pub async fn delete_section(
    service: &SectionService,
    section_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_section(section_id).await {
        Ok(true) => {
            // 级联删除会带走章节下的所有资料，逐条失效不可行，直接清空
            if let Some(cache) = service.get_cache(request) {
                tree_cache::evict_all(&cache).await;
            }
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "Section not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Section deletion failed: {e}"),
            )),
        ),
    }
}
