use crate::models::common::PaginationQuery;
use serde::Deserialize;

/// 创建章节请求
#[derive(Debug, Deserialize)]
pub struct CreateSectionRequest {
    pub title: String,
}

/// 更新章节请求（PUT/PATCH 共用，缺省字段保持原值）
#[derive(Debug, Deserialize)]
pub struct UpdateSectionRequest {
    pub title: Option<String>,
}

/// 章节列表查询参数（HTTP 请求）
#[derive(Debug, Deserialize)]
pub struct SectionListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub title: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SectionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub title: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
