use rand::Rng;

/// 生成随机密码（用于默认管理员与新建账号的初始密码）
pub fn generate_random_password(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_length() {
        assert_eq!(generate_random_password(16).chars().count(), 16);
        assert_eq!(generate_random_password(0).len(), 0);
    }

    #[test]
    fn test_charset_only() {
        let pwd = generate_random_password(64);
        assert!(pwd.chars().all(|c| c.is_ascii_alphanumeric() || "!@#$%".contains(c)));
    }
}
