use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub username: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

// 用户创建请求（password 字段在进入存储层前必须已哈希）
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub username: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
