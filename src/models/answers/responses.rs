use super::entities::UserAnswer;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 答题记录响应
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: UserAnswer,
}

// 答题记录列表响应
#[derive(Debug, Serialize)]
pub struct AnswerListResponse {
    pub items: Vec<UserAnswer>,
    pub pagination: PaginationInfo,
}
