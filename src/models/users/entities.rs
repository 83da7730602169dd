use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Admin,       // 系统管理员
    Registrar,   // 教务注册员
    ProgramHead, // 专业负责人
    Faculty,     // 授课教师
    Student,     // 学生
    Judge,       // 评审
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const REGISTRAR: &'static str = "registrar";
    pub const PROGRAM_HEAD: &'static str = "program_head";
    pub const FACULTY: &'static str = "faculty";
    pub const STUDENT: &'static str = "student";
    pub const JUDGE: &'static str = "judge";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn registrar_roles() -> &'static [&'static UserRole] {
        &[&Self::Registrar, &Self::Admin]
    }
    pub fn program_head_roles() -> &'static [&'static UserRole] {
        &[&Self::ProgramHead, &Self::Admin]
    }
    pub fn faculty_roles() -> &'static [&'static UserRole] {
        &[&Self::Faculty, &Self::Admin]
    }
    pub fn student_roles() -> &'static [&'static UserRole] {
        &[&Self::Student]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[
            &Self::Admin,
            &Self::Registrar,
            &Self::ProgramHead,
            &Self::Faculty,
            &Self::Student,
            &Self::Judge,
        ]
    }

    /// 登录成功后各角色的落地页
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserRole::Admin => "/admin/dashboard",
            UserRole::Registrar => "/registrar/dashboard",
            UserRole::ProgramHead => "/program-head/dashboard",
            UserRole::Faculty => "/faculty/dashboard",
            UserRole::Student => "/student/dashboard",
            UserRole::Judge => "/judge/dashboard",
        }
    }
}

/// 从角色字符串解析落地页，无法识别的角色回退到登录页
pub fn dashboard_path_for(role: &str) -> &'static str {
    role.parse::<UserRole>()
        .map(|r| r.dashboard_path())
        .unwrap_or("/login")
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: admin, registrar, program_head, faculty, student, judge"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Admin => UserRole::ADMIN,
            UserRole::Registrar => UserRole::REGISTRAR,
            UserRole::ProgramHead => UserRole::PROGRAM_HEAD,
            UserRole::Faculty => UserRole::FACULTY,
            UserRole::Student => UserRole::STUDENT,
            UserRole::Judge => UserRole::JUDGE,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::REGISTRAR => Ok(UserRole::Registrar),
            UserRole::PROGRAM_HEAD => Ok(UserRole::ProgramHead),
            UserRole::FACULTY => Ok(UserRole::Faculty),
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::JUDGE => Ok(UserRole::Judge),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "frontend/src/types/generated/user.ts")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的用户状态: '{s}'. 支持的状态: active, inactive, suspended"
            ))
        })
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Inactive => write!(f, "inactive"),
            UserStatus::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "suspended" => Ok(UserStatus::Suspended),
            _ => Err(format!("Invalid user status: {s}")),
        }
    }
}

// 用户资料
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/user.ts")]
pub struct UserProfile {
    pub display_name: String,
    pub avatar_url: Option<String>,
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub profile: UserProfile,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    // 生成访问令牌
    pub fn generate_access_token(&self) -> Result<String, String> {
        crate::utils::jwt::JwtUtils::generate_access_token(self.id, &self.role.to_string())
            .map_err(|e| format!("生成 access token 失败: {e}"))
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in UserRole::all_roles() {
            assert_eq!(role.to_string().parse::<UserRole>().unwrap(), **role);
        }
    }

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(dashboard_path_for("admin"), "/admin/dashboard");
        assert_eq!(dashboard_path_for("registrar"), "/registrar/dashboard");
        assert_eq!(dashboard_path_for("program_head"), "/program-head/dashboard");
        assert_eq!(dashboard_path_for("faculty"), "/faculty/dashboard");
        assert_eq!(dashboard_path_for("student"), "/student/dashboard");
        assert_eq!(dashboard_path_for("judge"), "/judge/dashboard");
    }

    #[test]
    fn test_dashboard_fallback_for_unknown_role() {
        assert_eq!(dashboard_path_for("superuser"), "/login");
        assert_eq!(dashboard_path_for(""), "/login");
        assert_eq!(dashboard_path_for("ADMIN"), "/login");
    }
}
