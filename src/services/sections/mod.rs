pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::sections::requests::{
    CreateSectionRequest, SectionListParams, UpdateSectionRequest,
};
use crate::storage::Storage;

pub struct SectionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SectionService {
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

    // 创建章节
    pub async fn create_section(
        &self,
        section_data: CreateSectionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_section(self, section_data, request).await
    }

    // 根据ID获取章节
    pub async fn get_section(
        &self,
        section_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_section(self, section_id, request).await
    }

    // 获取章节列表
    pub async fn list_sections(
        &self,
        query: SectionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_sections(self, query, request).await
    }

    // 更新章节信息
    pub async fn update_section(
        &self,
        section_id: i64,
        update_data: UpdateSectionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_section(self, section_id, update_data, request).await
    }

    // 删除章节
    pub async fn delete_section(
        &self,
        section_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_section(self, section_id, request).await
    }
}
