use crate::models::users::entities::User;
use serde::Serialize;
use ts_rs::TS;

// 登录成功响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    /// 角色对应的落地页路径
    pub redirect_to: String,
    pub user: User,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/auth.ts")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/auth.ts")]
pub struct UserInfoResponse {
    pub user: User,
}
