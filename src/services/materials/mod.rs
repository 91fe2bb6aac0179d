pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod tree_cache;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::materials::requests::{
    CreateMaterialRequest, MaterialListParams, UpdateMaterialRequest,
};
use crate::storage::Storage;

pub struct MaterialService {
    storage: Option<Arc<dyn Storage>>,
}

impl MaterialService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 缓存是可选的（测试环境不注册缓存后端）
    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Option<Arc<dyn ObjectCache>> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .map(|cache| cache.get_ref().clone())
    }

    // 创建学习资料
    pub async fn create_material(
        &self,
        material_data: CreateMaterialRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_material(self, material_data, request).await
    }

    // 根据ID获取学习资料（嵌套读取）
    pub async fn get_material(
        &self,
        material_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_material(self, material_id, request).await
    }

    // 获取学习资料列表
    pub async fn list_materials(
        &self,
        query: MaterialListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_materials(self, query, request).await
    }

    // 更新学习资料信息
    pub async fn update_material(
        &self,
        material_id: i64,
        update_data: UpdateMaterialRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_material(self, material_id, update_data, request).await
    }

    // 删除学习资料
    pub async fn delete_material(
        &self,
        material_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_material(self, material_id, request).await
    }
}
