//! API 数据模型
//!
//! 按业务域拆分：请求体、响应体与业务实体分离，数据库实体见 `crate::entity`。

pub mod attendance;
pub mod auth;
pub mod common;
pub mod courses;
pub mod curricula;
pub mod enrollments;
pub mod grades;
pub mod reports;
pub mod schedules;
pub mod school_years;
pub mod sections;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码
///
/// 通用段沿用 HTTP 状态码语义，各业务域从 1000 起分段。
/// `ApiResponse.code` 始终携带该值，前端据此分流提示。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 200,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    RateLimitExceeded = 429,
    InternalServerError = 500,

    // 用户与认证 1xxx
    AuthFailed = 1001,
    UserNotFound = 1002,
    UserAlreadyExists = 1003,
    UserNameInvalid = 1004,
    UserEmailInvalid = 1005,
    UserPasswordInvalid = 1006,
    UserCreationFailed = 1007,
    UserUpdateFailed = 1008,
    CanNotDeleteCurrentUser = 1009,

    // 学年 2xxx
    SchoolYearNotFound = 2001,
    SchoolYearAlreadyExists = 2002,
    SchoolYearLabelInvalid = 2003,

    // 课程体系 3xxx
    CourseNotFound = 3001,
    CourseAlreadyExists = 3002,
    CurriculumNotFound = 3003,
    CurriculumAlreadyExists = 3004,
    SubjectNotFound = 3005,
    SubjectAlreadyExists = 3006,
    SubjectAlreadyAssigned = 3007,
    SectionNotFound = 3008,
    SectionAlreadyExists = 3009,

    // 排课 4xxx
    ScheduleNotFound = 4001,
    ScheduleConflict = 4002,
    ScheduleTimeInvalid = 4003,

    // 注册 5xxx
    EnrollmentNotFound = 5001,
    EnrollmentAlreadyExists = 5002,
    EnrollmentStatusInvalid = 5003,

    // 成绩 6xxx
    GradeNotFound = 6001,
    GradeStatusInvalid = 6002,
    GradeMarkInvalid = 6003,

    // 考勤 7xxx
    AttendanceDateInvalid = 7001,
    AttendanceStatusInvalid = 7002,

    // 文件 8xxx
    FileUploadFailed = 8001,
    FileTypeNotAllowed = 8002,
    FileSizeExceeded = 8003,
    FileNotFound = 8004,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 200);
        assert_eq!(ErrorCode::RateLimitExceeded as i32, 429);
        assert_eq!(ErrorCode::AuthFailed as i32, 1001);
        assert_eq!(ErrorCode::ScheduleConflict as i32, 4002);
    }
}
