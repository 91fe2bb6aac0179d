use crate::models::common::PaginationQuery;
use crate::models::common::pagination::deserialize_optional_i64;
use serde::Deserialize;

/// 创建学习资料请求
#[derive(Debug, Deserialize)]
pub struct CreateMaterialRequest {
    pub section_id: i64,
    pub title: String,
    pub content: String,
}

/// 更新学习资料请求（PUT/PATCH 共用，缺省字段保持原值）
#[derive(Debug, Deserialize)]
pub struct UpdateMaterialRequest {
    pub section_id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// 学习资料列表查询参数（HTTP 请求）
///
/// `title`/`section` 为精确匹配过滤，`search` 为标题模糊搜索。
#[derive(Debug, Deserialize)]
pub struct MaterialListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub section: Option<i64>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct MaterialListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub title: Option<String>,
    pub section_id: Option<i64>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
