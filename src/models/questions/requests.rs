use crate::models::common::PaginationQuery;
use crate::models::common::pagination::deserialize_optional_i64;
use serde::Deserialize;

/// 创建题目请求
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub test_id: i64,
    pub text: String,
}

/// 更新题目请求（PUT/PATCH 共用，缺省字段保持原值）
#[derive(Debug, Deserialize)]
pub struct UpdateQuestionRequest {
    pub test_id: Option<i64>,
    pub text: Option<String>,
}

/// 题目列表查询参数（HTTP 请求）
#[derive(Debug, Deserialize)]
pub struct QuestionListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub test: Option<i64>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct QuestionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub text: Option<String>,
    pub test_id: Option<i64>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
