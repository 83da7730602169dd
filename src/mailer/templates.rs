//! 邮件 HTML 模板
//!
//! 模板用 `{placeholder}` 占位，发送前由 `render` 逐个替换。

pub const ACCOUNT_CREATED: &str = r#"<!DOCTYPE html>
<html>
<body style="font-family: Arial, sans-serif; color: #333;">
  <h2>Welcome to {system_name}</h2>
  <p>Hi {display_name},</p>
  <p>An account has been created for you.</p>
  <table cellpadding="4">
    <tr><td><b>Username</b></td><td>{username}</td></tr>
    <tr><td><b>Role</b></td><td>{role}</td></tr>
  </table>
  <p>Please sign in and change your password as soon as possible.</p>
  <p style="color: #888; font-size: 12px;">This is an automated message, please do not reply.</p>
</body>
</html>"#;

pub const PASSWORD_RESET: &str = r#"<!DOCTYPE html>
<html>
<body style="font-family: Arial, sans-serif; color: #333;">
  <h2>{system_name} - Password Reset</h2>
  <p>Hi {display_name},</p>
  <p>Your password has been reset by an administrator. Your temporary password is:</p>
  <p style="font-size: 18px;"><b>{temporary_password}</b></p>
  <p>Please sign in and change it immediately.</p>
  <p style="color: #888; font-size: 12px;">This is an automated message, please do not reply.</p>
</body>
</html>"#;

/// 逐个替换模板中的占位符
pub fn render(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in replacements {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_placeholders() {
        let html = render(
            ACCOUNT_CREATED,
            &[
                ("system_name", "EnrollSys"),
                ("display_name", "Juan"),
                ("username", "juan2026"),
                ("role", "student"),
            ],
        );
        assert!(html.contains("Welcome to EnrollSys"));
        assert!(html.contains("juan2026"));
        assert!(!html.contains("{username}"));
    }
}
