use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{Error as ActixError, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::error::AppError;

/// Extracts the raw bearer token from the `Authorization` header.
///
/// Fails with `Unauthorized` ("No token provided") when the header is absent,
/// not valid UTF-8, or not of the form `Bearer <token>`. Handlers that accept
/// anonymous requests take `Option<BearerToken>` instead, which actix resolves
/// to `None` on extraction failure.
///
/// This extractor does not verify the token; it only pulls the credential off
/// the request. Verification goes through [`crate::auth::token::verify`].
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequest for BearerToken {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match token {
            Some(token) if !token.is_empty() => ready(Ok(BearerToken(token.to_string()))),
            _ => {
                let err = AppError::Unauthorized("No token provided".to_string());
                ready(Err(err.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_rt::test]
    async fn test_bearer_token_extractor_success() {
        let req = test::TestRequest::default()
            .insert_header(("Authorization", "Bearer abc.def.ghi"))
            .to_http_request();

        let mut payload = Payload::None;
        let extracted = BearerToken::from_request(&req, &mut payload).await;
        assert!(extracted.is_ok());
        assert_eq!(extracted.unwrap().0, "abc.def.ghi");
    }

    #[actix_rt::test]
    async fn test_bearer_token_extractor_missing_header() {
        let req = test::TestRequest::default().to_http_request();

        let mut payload = Payload::None;
        let result = BearerToken::from_request(&req, &mut payload).await;
        assert!(result.is_err());

        let response = result.unwrap_err().error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_bearer_token_extractor_wrong_scheme() {
        let req = test::TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_http_request();

        let mut payload = Payload::None;
        assert!(BearerToken::from_request(&req, &mut payload).await.is_err());
    }

    #[actix_rt::test]
    async fn test_optional_bearer_token_is_none_when_absent() {
        let req = test::TestRequest::default().to_http_request();

        let mut payload = Payload::None;
        let result = Option::<BearerToken>::from_request(&req, &mut payload)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
