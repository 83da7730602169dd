//! 登录失败限流
//!
//! 以「用户名 + 客户端 IP」为键统计窗口内的失败次数，
//! 达到上限后拒绝后续尝试，登录成功时清零。
//! 计数条目由缓存 TTL 自动过期，窗口即 TTL。

use moka::future::Cache;
use once_cell::sync::Lazy;
use std::time::Duration;

use crate::config::AppConfig;

static LOGIN_ATTEMPT_CACHE: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(60))
        .max_capacity(100_000)
        .build()
});

fn attempt_key(username: &str, client_ip: &str) -> String {
    format!("{username}:{client_ip}")
}

async fn failure_count(username: &str, client_ip: &str) -> u32 {
    LOGIN_ATTEMPT_CACHE
        .get(&attempt_key(username, client_ip))
        .await
        .unwrap_or(0)
}

async fn is_blocked_with(username: &str, client_ip: &str, max_attempts: u32) -> bool {
    failure_count(username, client_ip).await >= max_attempts
}

/// 当前 (用户名, IP) 是否已被锁定
pub async fn is_blocked(username: &str, client_ip: &str) -> bool {
    let config = AppConfig::get();
    is_blocked_with(username, client_ip, config.auth.login_max_attempts).await
}

/// 记录一次登录失败
pub async fn record_failure(username: &str, client_ip: &str) {
    let key = attempt_key(username, client_ip);
    let count = LOGIN_ATTEMPT_CACHE.get(&key).await.unwrap_or(0);
    LOGIN_ATTEMPT_CACHE.insert(key, count + 1).await;
}

/// 登录成功后清除失败计数
pub async fn clear_attempts(username: &str, client_ip: &str) {
    LOGIN_ATTEMPT_CACHE
        .invalidate(&attempt_key(username, client_ip))
        .await;
}

/// 剩余等待秒数（响应 Retry-After 用）
pub fn retry_after_secs() -> u64 {
    AppConfig::get().auth.login_window_secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sixth_attempt_is_blocked() {
        let (user, ip) = ("limtest-block", "10.0.0.1");
        for _ in 0..5 {
            assert!(!is_blocked_with(user, ip, 5).await);
            record_failure(user, ip).await;
        }
        assert!(is_blocked_with(user, ip, 5).await);
    }

    #[tokio::test]
    async fn test_keys_are_isolated() {
        let user = "limtest-isolation";
        for _ in 0..5 {
            record_failure(user, "10.0.0.2").await;
        }
        assert!(is_blocked_with(user, "10.0.0.2", 5).await);
        // 同用户不同 IP 不受影响
        assert!(!is_blocked_with(user, "10.0.0.3", 5).await);
        // 同 IP 不同用户不受影响
        assert!(!is_blocked_with("limtest-other", "10.0.0.2", 5).await);
    }

    #[tokio::test]
    async fn test_success_clears_counter() {
        let (user, ip) = ("limtest-clear", "10.0.0.4");
        for _ in 0..5 {
            record_failure(user, ip).await;
        }
        assert!(is_blocked_with(user, ip, 5).await);

        clear_attempts(user, ip).await;
        assert!(!is_blocked_with(user, ip, 5).await);
    }
}
