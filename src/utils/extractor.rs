use std::future::{Ready, ready};
use std::ops::Deref;

use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: &str) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(message.to_string(), response).into()
}

/// 路径 ID 提取器
///
/// 取路径中最后一个动态片段并解析为正整数，解析失败时直接返回
/// 统一格式的 400 响应，处理函数里无需再做解析。
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl Deref for SafeIDI64 {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().iter().last().map(|(_, value)| value);
        ready(match raw.map(str::parse::<i64>) {
            Some(Ok(id)) if id > 0 => Ok(SafeIDI64(id)),
            _ => Err(bad_request("Invalid ID parameter")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_safe_id_valid() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        let id = SafeIDI64::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(*id, 42);
    }

    #[actix_web::test]
    async fn test_safe_id_rejects_garbage() {
        for raw in ["abc", "-5", "0", "1.5"] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            assert!(
                SafeIDI64::from_request(&req, &mut Payload::None)
                    .await
                    .is_err()
            );
        }
    }

}
