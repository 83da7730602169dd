use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static SCHOOL_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{4}$").expect("Invalid school year regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验学年标签，格式为 "2025-2026" 且后一年比前一年大 1
pub fn validate_school_year_label(label: &str) -> Result<(), &'static str> {
    if !SCHOOL_YEAR_RE.is_match(label) {
        return Err("School year must use the format YYYY-YYYY");
    }
    let (start, end) = label.split_once('-').expect("regex guarantees one hyphen");
    let start: i32 = start.parse().map_err(|_| "Invalid start year")?;
    let end: i32 = end.parse().map_err(|_| "Invalid end year")?;
    if end != start + 1 {
        return Err("School year must span two consecutive years");
    }
    Ok(())
}

/// 校验年级（1-6 覆盖本科与延长学制）
pub fn validate_year_level(year_level: i32) -> Result<(), &'static str> {
    if !(1..=6).contains(&year_level) {
        return Err("Year level must be between 1 and 6");
    }
    Ok(())
}

/// 校验百分制成绩输入
pub fn validate_mark(mark: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&mark) || !mark.is_finite() {
        return Err("Mark must be between 0 and 100");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("juan-dela_cruz").is_ok());
        assert!(validate_username("abc").is_err());
        assert!(validate_username("has space here").is_err());
    }

    #[test]
    fn test_school_year_label() {
        assert!(validate_school_year_label("2025-2026").is_ok());
        assert!(validate_school_year_label("2025-2027").is_err());
        assert!(validate_school_year_label("25-26").is_err());
        assert!(validate_school_year_label("2026-2025").is_err());
    }

    #[test]
    fn test_year_level_bounds() {
        assert!(validate_year_level(1).is_ok());
        assert!(validate_year_level(6).is_ok());
        assert!(validate_year_level(0).is_err());
        assert!(validate_year_level(7).is_err());
    }

    #[test]
    fn test_mark_bounds() {
        assert!(validate_mark(0.0).is_ok());
        assert!(validate_mark(100.0).is_ok());
        assert!(validate_mark(100.01).is_err());
        assert!(validate_mark(-1.0).is_err());
        assert!(validate_mark(f64::NAN).is_err());
    }
}
