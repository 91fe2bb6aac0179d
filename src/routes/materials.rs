use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::materials::requests::{
    CreateMaterialRequest, MaterialListParams, UpdateMaterialRequest,
};
use crate::services::MaterialService;
use crate::utils::SafeIDI64;

// 懒加载的全局 MaterialService 实例
static MATERIAL_SERVICE: Lazy<MaterialService> = Lazy::new(MaterialService::new_lazy);

// HTTP处理程序
pub async fn list_materials(
    req: HttpRequest,
    query: web::Query<MaterialListParams>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .list_materials(query.into_inner(), &req)
        .await
}

pub async fn create_material(
    req: HttpRequest,
    material_data: web::Json<CreateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .create_material(material_data.into_inner(), &req)
        .await
}

pub async fn get_material(req: HttpRequest, material_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.get_material(material_id.0, &req).await
}

pub async fn update_material(
    req: HttpRequest,
    material_id: SafeIDI64,
    update_data: web::Json<UpdateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .update_material(material_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_material(
    req: HttpRequest,
    material_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.delete_material(material_id.0, &req).await
}

// 配置路由
pub fn configure_material_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/materials")
            .route("", web::get().to(list_materials))
            .route("", web::post().to(create_material))
            .route("/{id}", web::get().to(get_material))
            .route("/{id}", web::put().to(update_material))
            .route("/{id}", web::patch().to(update_material))
            .route("/{id}", web::delete().to(delete_material)),
    );
}
