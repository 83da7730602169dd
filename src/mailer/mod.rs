//! SMTP 邮件发送
//!
//! 配置 `smtp.enabled = false` 时所有发送调用直接返回，不影响主流程；
//! 发送失败只记录日志，绝不阻塞 HTTP 请求。

pub mod templates;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::AppConfig;
use crate::errors::{EnrollSysError, Result};

/// 构建 SMTP 传输（按配置选择端口与凭据）
fn build_transport(config: &AppConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
    let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp.host)
        .map_err(|e| EnrollSysError::mail_delivery(format!("SMTP 连接配置无效: {e}")))?
        .port(config.smtp.port);

    if !config.smtp.username.is_empty() {
        builder = builder.credentials(Credentials::new(
            config.smtp.username.clone(),
            config.smtp.password.clone(),
        ));
    }

    Ok(builder.build())
}

/// 发送一封 HTML 邮件
async fn send_html(to: &str, subject: &str, html: String) -> Result<()> {
    let config = AppConfig::get();

    if !config.smtp.enabled {
        tracing::debug!("SMTP disabled, skipping mail to {}", to);
        return Ok(());
    }

    let from = format!("{} <{}>", config.smtp.from_name, config.smtp.from_address)
        .parse()
        .map_err(|e| EnrollSysError::mail_delivery(format!("发件人地址无效: {e}")))?;
    let to_mailbox = to
        .parse()
        .map_err(|e| EnrollSysError::mail_delivery(format!("收件人地址无效: {e}")))?;

    let message = Message::builder()
        .from(from)
        .to(to_mailbox)
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(html)
        .map_err(|e| EnrollSysError::mail_delivery(format!("构建邮件失败: {e}")))?;

    let transport = build_transport(config)?;
    transport
        .send(message)
        .await
        .map_err(|e| EnrollSysError::mail_delivery(format!("发送邮件失败: {e}")))?;

    Ok(())
}

/// 异步发送账号开通通知（fire-and-forget）
pub fn send_account_created(email: String, display_name: String, username: String, role: String) {
    tokio::spawn(async move {
        let config = AppConfig::get();
        let html = templates::render(
            templates::ACCOUNT_CREATED,
            &[
                ("system_name", config.app.system_name.as_str()),
                ("display_name", display_name.as_str()),
                ("username", username.as_str()),
                ("role", role.as_str()),
            ],
        );

        if let Err(e) = send_html(&email, "Your account has been created", html).await {
            tracing::error!("Account creation mail to {} failed: {}", email, e);
        }
    });
}

/// 异步发送密码重置通知（fire-and-forget）
pub fn send_password_reset(email: String, display_name: String, temporary_password: String) {
    tokio::spawn(async move {
        let config = AppConfig::get();
        let html = templates::render(
            templates::PASSWORD_RESET,
            &[
                ("system_name", config.app.system_name.as_str()),
                ("display_name", display_name.as_str()),
                ("temporary_password", temporary_password.as_str()),
            ],
        );

        if let Err(e) = send_html(&email, "Your password has been reset", html).await {
            tracing::error!("Password reset mail to {} failed: {}", email, e);
        }
    });
}
