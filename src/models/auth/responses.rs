use serde::Serialize;

// 注册成功后返回的最小账号表示，不含任何凭据字段
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub username: String,
}
