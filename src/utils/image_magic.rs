/// 验证头像文件内容的魔术字节是否与扩展名匹配
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `extension` - 文件扩展名（包含点号，如 ".png"）
pub fn validate_image_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        ".webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",

        // 头像只接受常见图片格式，其余一律拒绝
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(validate_image_magic_bytes(&png_header, ".png"));
        assert!(validate_image_magic_bytes(&png_header, ".PNG"));
        assert!(!validate_image_magic_bytes(&png_header, ".jpg"));
    }

    #[test]
    fn test_jpeg_magic() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(validate_image_magic_bytes(&jpeg_header, ".jpg"));
        assert!(validate_image_magic_bytes(&jpeg_header, ".jpeg"));
        assert!(!validate_image_magic_bytes(&jpeg_header, ".png"));
    }

    #[test]
    fn test_webp_magic() {
        let mut webp_header = b"RIFF\x00\x00\x00\x00WEBP".to_vec();
        assert!(validate_image_magic_bytes(&webp_header, ".webp"));
        webp_header[8] = b'X';
        assert!(!validate_image_magic_bytes(&webp_header, ".webp"));
    }

    #[test]
    fn test_empty_data() {
        assert!(!validate_image_magic_bytes(&[], ".png"));
    }

    #[test]
    fn test_rejected_extension() {
        let data = [0x00, 0x01, 0x02, 0x03];
        assert!(!validate_image_magic_bytes(&data, ".exe"));
        assert!(!validate_image_magic_bytes(&data, ".pdf"));
    }
}
