use super::entities::Question;
use crate::models::choices::entities::Choice;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 题目的完整读取表示：题目本身加上内嵌的选项列表。
#[derive(Debug, Serialize)]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    pub choices: Vec<Choice>,
}

// 题目响应
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: QuestionDetail,
}

// 题目列表响应
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub items: Vec<QuestionDetail>,
    pub pagination: PaginationInfo,
}
