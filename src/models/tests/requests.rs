use crate::models::common::PaginationQuery;
use crate::models::common::pagination::deserialize_optional_i64;
use serde::Deserialize;

/// 创建测验请求
#[derive(Debug, Deserialize)]
pub struct CreateTestRequest {
    pub material_id: i64,
    pub title: String,
}

/// 更新测验请求（PUT/PATCH 共用，缺省字段保持原值）
#[derive(Debug, Deserialize)]
pub struct UpdateTestRequest {
    pub material_id: Option<i64>,
    pub title: Option<String>,
}

/// 测验列表查询参数（HTTP 请求）
#[derive(Debug, Deserialize)]
pub struct TestListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub material: Option<i64>,
    pub title: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct TestListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub material_id: Option<i64>,
    pub title: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
