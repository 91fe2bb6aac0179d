use super::entities::Choice;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 选项响应
#[derive(Debug, Serialize)]
pub struct ChoiceResponse {
    pub choice: Choice,
}

// 选项列表响应
#[derive(Debug, Serialize)]
pub struct ChoiceListResponse {
    pub items: Vec<Choice>,
    pub pagination: PaginationInfo,
}
