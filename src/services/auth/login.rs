use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
    users::entities::UserStatus,
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::{AuthService, limiter};

/// 从请求中取客户端 IP（限流键用）
fn client_ip(request: &HttpRequest) -> String {
    request
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();
    let ip = client_ip(request);

    // 1. 失败次数达到上限时直接拒绝，不再触碰凭据
    if limiter::is_blocked(&login_request.username, &ip).await {
        tracing::warn!(
            "Login blocked for {} from {} (too many failed attempts)",
            login_request.username,
            ip
        );
        return Ok(HttpResponse::TooManyRequests()
            .insert_header(("Retry-After", limiter::retry_after_secs().to_string()))
            .json(ApiResponse::error_empty(
                ErrorCode::RateLimitExceeded,
                "Too many failed login attempts, please try again later",
            )));
    }

    // 2. 根据用户名或邮箱获取用户信息
    match storage
        .get_user_by_username_or_email(&login_request.username)
        .await
    {
        Ok(Some(user)) => {
            // 3. 验证密码
            if verify_password(&login_request.password, &user.password_hash) {
                if user.status != UserStatus::Active {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::AuthFailed,
                        "Account is not active",
                    )));
                }

                // 4. 成功后清零失败计数并更新登录时间
                limiter::clear_attempts(&login_request.username, &ip).await;
                let _ = storage.update_last_login(user.id).await;

                // 5. 生成令牌对
                match user.generate_token_pair(login_request.remember_me.then(|| {
                    chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)
                })) {
                    Ok(token_pair) => {
                        tracing::info!("User {} logged in successfully", user.username);

                        let response = LoginResponse {
                            access_token: token_pair.access_token,
                            expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                            redirect_to: user.role.dashboard_path().to_string(),
                            user,
                        };

                        // 6. 创建 refresh token cookie
                        let refresh_cookie =
                            jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                        Ok(HttpResponse::Ok()
                            .cookie(refresh_cookie)
                            .json(ApiResponse::success(response, "Login successful")))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(
                            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Login failed, unable to generate token",
                            )),
                        )
                    }
                }
            } else {
                limiter::record_failure(&login_request.username, &ip).await;
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Username or password is incorrect",
                )))
            }
        }
        Ok(None) => {
            // 未知用户同样计入失败，避免用户名枚举绕过限流
            limiter::record_failure(&login_request.username, &ip).await;
            Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Username or password is incorrect",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}
