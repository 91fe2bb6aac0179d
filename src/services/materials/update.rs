use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{MaterialService, tree_cache};
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    materials::{requests::UpdateMaterialRequest, responses::MaterialResponse},
};

pub async fn update_material(
    service: &MaterialService,
    material_id: i64,
    update_data: UpdateMaterialRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut errors: Vec<(&str, Vec<String>)> = Vec::new();

    if let Some(ref title) = update_data.title
        && title.trim().is_empty()
    {
        errors.push(("title", vec!["This field may not be blank.".to_string()]));
    }

    // 若更新父引用，新的章节必须存在
    if let Some(section_id) = update_data.section_id {
        match storage.get_section_by_id(section_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                errors.push((
                    "section_id",
                    vec![format!("Section {section_id} does not exist")],
                ));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to validate section: {e}"),
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

    match storage.update_material(material_id, update_data).await {
        Ok(Some(_)) => {
            if let Some(cache) = service.get_cache(request) {
                tree_cache::evict(&cache, material_id).await;
            }

            // 更新成功后按嵌套表示返回
            match storage.get_material_detail(material_id).await {
                Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                    MaterialResponse { material: detail },
                    "学习资料更新成功",
                ))),
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
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MaterialNotFound,
            "Material not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update material: {e}"),
            )),
        ),
    }
}
