use crate::models::common::PaginationQuery;
use crate::models::common::pagination::{deserialize_optional_bool, deserialize_optional_i64};
use serde::Deserialize;

/// 创建选项请求
#[derive(Debug, Deserialize)]
pub struct CreateChoiceRequest {
    pub question_id: i64,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// 更新选项请求（PUT/PATCH 共用，缺省字段保持原值）
#[derive(Debug, Deserialize)]
pub struct UpdateChoiceRequest {
    pub question_id: Option<i64>,
    pub text: Option<String>,
    pub is_correct: Option<bool>,
}

/// 选项列表查询参数（HTTP 请求）
#[derive(Debug, Deserialize)]
pub struct ChoiceListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub question: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub is_correct: Option<bool>,
    pub ordering: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ChoiceListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub question_id: Option<i64>,
    pub is_correct: Option<bool>,
    pub ordering: Option<String>,
}
