use super::entities::Test;
use crate::models::common::PaginationInfo;
use crate::models::questions::responses::QuestionDetail;
use serde::Serialize;

// 测验的完整读取表示：测验本身加上内嵌的题目（含选项）。
#[derive(Debug, Serialize)]
pub struct TestDetail {
    #[serde(flatten)]
    pub test: Test,
    pub questions: Vec<QuestionDetail>,
}

// 测验响应
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub test: TestDetail,
}

// 测验列表响应
#[derive(Debug, Serialize)]
pub struct TestListResponse {
    pub items: Vec<TestDetail>,
    pub pagination: PaginationInfo,
}
