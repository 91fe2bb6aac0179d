use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::models::common::response::field_errors;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode, auth::requests::RegisterRequest, auth::responses::RegisterResponse};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 逐字段校验，聚合后一次性返回
    let mut errors: Vec<(&str, Vec<String>)> = Vec::new();

    if let Err(msg) = validate_username(&register_request.username) {
        errors.push(("username", vec![msg.to_string()]));
    }

    if let Err(msg) = validate_password(&register_request.password) {
        errors.push(("password", vec![msg.to_string()]));
    }

    // 用户名查重。并发注册时的竞态由唯一索引兜底
    if errors.is_empty() {
        match storage.get_user_by_username(&register_request.username).await {
            Ok(Some(_)) => {
                errors.push((
                    "username",
                    vec!["A user with that username already exists.".to_string()],
                ));
            }
            Ok(None) => {}
            Err(e) => {
                error!("Register failed while checking username: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::RegisterFailed,
                        format!("Register failed: {e}"),
                    )),
                );
            }
        }
    }

    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            field_errors(errors),
            "Validation failed",
        )));
    }

    // 明文密码只在这里出现，落库前必须替换为哈希
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("密码哈希失败: {e}"),
                )),
            );
        }
    };

    let create_request = CreateUserRequest {
        username: register_request.username,
        password: password_hash,
    };

    match storage.create_user(create_request).await {
        Ok(user) => Ok(HttpResponse::Created().json(ApiResponse::success(
            RegisterResponse {
                id: user.id,
                username: user.username,
            },
            "注册成功",
        ))),
        Err(e) => {
            let msg = format!("User creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突（并发注册竞态）
            if msg.contains("UNIQUE constraint failed") || msg.contains("Duplicate entry") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error(
                    ErrorCode::UserAlreadyExists,
                    field_errors([(
                        "username",
                        vec!["A user with that username already exists.".to_string()],
                    )]),
                    "Validation failed",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::RegisterFailed, msg)))
            }
        }
    }
}
