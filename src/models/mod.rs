//! 数据模型定义
//!
//! HTTP 请求/响应模型与业务实体，与 entity 模块中的数据库实体分离。

pub mod answers;
pub mod auth;
pub mod choices;
pub mod common;
pub mod materials;
pub mod questions;
pub mod sections;
pub mod tests;
pub mod users;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

// 业务错误码，随 ApiResponse 返回给客户端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    ValidationFailed = 40001,
    InvalidJsonBody = 40002,
    InvalidQueryParameter = 40003,
    UserNameInvalid = 40004,
    PasswordInvalid = 40005,
    UserAlreadyExists = 40006,

    NotFound = 40400,
    UserNotFound = 40401,
    SectionNotFound = 40402,
    MaterialNotFound = 40403,
    TestNotFound = 40404,
    QuestionNotFound = 40405,
    ChoiceNotFound = 40406,
    AnswerNotFound = 40407,

    RateLimitExceeded = 42901,

    InternalServerError = 50000,
    RegisterFailed = 50001,
}

// 记录程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
