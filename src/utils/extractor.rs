//! 路径参数安全提取器
//!
//! 将路径中的 `{id}` 解析为正整数，解析失败时直接返回 400，
//! 避免每个 handler 重复写解析逻辑。

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => ready(Ok(SafeIDI64(id))),
            _ => {
                let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidQueryParameter,
                    format!("Invalid id in path: '{raw}'"),
                ));
                ready(Err(InternalError::from_response(
                    format!("invalid path id: '{raw}'"),
                    response,
                )
                .into()))
            }
        }
    }
}
