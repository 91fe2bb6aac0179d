use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MaterialService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    materials::{
        requests::CreateMaterialRequest,
        responses::{MaterialDetail, MaterialResponse},
    },
};

pub async fn create_material(
    service: &MaterialService,
    material_data: CreateMaterialRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut errors: Vec<(&str, Vec<String>)> = Vec::new();

    if material_data.title.trim().is_empty() {
        errors.push(("title", vec!["This field may not be blank.".to_string()]));
    }

    // 父引用必须指向已存在的章节
    match storage.get_section_by_id(material_data.section_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            errors.push((
                "section_id",
                vec![format!(
                    "Section {} does not exist",
                    material_data.section_id
                )],
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

    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            field_errors(errors),
            "Validation failed",
        )));
    }

    match storage.create_material(material_data).await {
        Ok(material) => Ok(HttpResponse::Created().json(ApiResponse::success(
            MaterialResponse {
                // 新建资料还没有任何测验
                material: MaterialDetail {
                    material,
                    tests: Vec::new(),
                },
            },
            "学习资料创建成功",
        ))),
        Err(e) => {
            error!("Material creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Material creation failed: {e}"),
                )),
            )
        }
    }
}
