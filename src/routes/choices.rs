use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::choices::requests::{
    ChoiceListParams, CreateChoiceRequest, UpdateChoiceRequest,
};
use crate::services::ChoiceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ChoiceService 实例
static CHOICE_SERVICE: Lazy<ChoiceService> = Lazy::new(ChoiceService::new_lazy);

// HTTP处理程序
pub async fn list_choices(
    req: HttpRequest,
    query: web::Query<ChoiceListParams>,
) -> ActixResult<HttpResponse> {
    CHOICE_SERVICE.list_choices(query.into_inner(), &req).await
}

pub async fn create_choice(
    req: HttpRequest,
    choice_data: web::Json<CreateChoiceRequest>,
) -> ActixResult<HttpResponse> {
    CHOICE_SERVICE
        .create_choice(choice_data.into_inner(), &req)
        .await
}

pub async fn get_choice(req: HttpRequest, choice_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CHOICE_SERVICE.get_choice(choice_id.0, &req).await
}

pub async fn update_choice(
    req: HttpRequest,
    choice_id: SafeIDI64,
    update_data: web::Json<UpdateChoiceRequest>,
) -> ActixResult<HttpResponse> {
    CHOICE_SERVICE
        .update_choice(choice_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_choice(req: HttpRequest, choice_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CHOICE_SERVICE.delete_choice(choice_id.0, &req).await
}

// 配置路由
pub fn configure_choice_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/choices")
            .route("", web::get().to(list_choices))
            .route("", web::post().to(create_choice))
            .route("/{id}", web::get().to(get_choice))
            .route("/{id}", web::put().to(update_choice))
            .route("/{id}", web::patch().to(update_choice))
            .route("/{id}", web::delete().to(delete_choice)),
    );
}
