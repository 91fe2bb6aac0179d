use crate::models::common::PaginationQuery;
use crate::models::common::pagination::deserialize_optional_i64;
use serde::Deserialize;

/// 创建答题记录请求
#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    pub user_id: i64,
    pub question_id: i64,
    pub choice_id: i64,
}

/// 更新答题记录请求（PUT/PATCH 共用，缺省字段保持原值）
#[derive(Debug, Deserialize)]
pub struct UpdateAnswerRequest {
    pub user_id: Option<i64>,
    pub question_id: Option<i64>,
    pub choice_id: Option<i64>,
}

/// 答题记录列表查询参数（HTTP 请求）
#[derive(Debug, Deserialize)]
pub struct AnswerListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub user: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub question: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub choice: Option<i64>,
    pub ordering: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AnswerListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub user_id: Option<i64>,
    pub question_id: Option<i64>,
    pub choice_id: Option<i64>,
    pub ordering: Option<String>,
}
