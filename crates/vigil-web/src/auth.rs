//! Admin credential check.
//!
//! A static username/password pair exchanged for a static bearer token.
//! This is the opaque credential-check boundary: handlers only ask
//! "is this caller allowed to hit admin routes", nothing more.

use axum::http::{header, HeaderMap, StatusCode};

/// Static admin credentials, read from the environment at startup.
#[derive(Clone)]
pub struct AdminAuth {
    username: String,
    password: String,
    token: String,
}

impl AdminAuth {
    /// Build from `VIGIL_ADMIN_USER`, `VIGIL_ADMIN_PASSWORD` and
    /// `VIGIL_ADMIN_TOKEN`, with prototype defaults.
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("VIGIL_ADMIN_USER").unwrap_or_else(|_| "admin".into()),
            password: std::env::var("VIGIL_ADMIN_PASSWORD").unwrap_or_else(|_| "admin".into()),
            token: std::env::var("VIGIL_ADMIN_TOKEN")
                .unwrap_or_else(|_| "admin-token-prototype".into()),
        }
    }

    /// Exchange a username/password pair for the bearer token.
    pub fn check_login(&self, username: &str, password: &str) -> Option<&str> {
        if username == self.username && password == self.password {
            Some(&self.token)
        } else {
            None
        }
    }

    /// Require a valid `Authorization: Bearer <token>` header.
    pub fn require_bearer(&self, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
        let authorized = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|token| token == self.token)
            .unwrap_or(false);

        if authorized {
            Ok(())
        } else {
            Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn auth() -> AdminAuth {
        AdminAuth {
            username: "admin".into(),
            password: "secret".into(),
            token: "token-123".into(),
        }
    }

    #[test]
    fn test_login_check() {
        let auth = auth();
        assert_eq!(auth.check_login("admin", "secret"), Some("token-123"));
        assert_eq!(auth.check_login("admin", "wrong"), None);
        assert_eq!(auth.check_login("root", "secret"), None);
    }

    #[test]
    fn test_bearer_check() {
        let auth = auth();

        let mut headers = HeaderMap::new();
        assert!(auth.require_bearer(&headers).is_err());

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer token-123"),
        );
        assert!(auth.require_bearer(&headers).is_ok());

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer wrong"),
        );
        assert!(auth.require_bearer(&headers).is_err());
    }
}
