pub mod extractors;
pub mod password;
pub mod token;

use crate::error::AppError;
use crate::models::PublicUser;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

// Re-export necessary items
pub use extractors::BearerToken;
pub use password::{hash_password, verify_password};
pub use token::{issue as issue_token, verify as verify_token, Claims};

/// The single message returned for every credential failure on login.
/// Unknown email and wrong password are deliberately indistinguishable.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

lazy_static! {
    // Shape check only: something@something.tld, no whitespace.
    static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Payload for a signup request.
///
/// Fields are optional at the wire level so that missing and empty values can
/// both produce the "All fields are required" response instead of a
/// deserialization error.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl SignupRequest {
    /// Validates presence, email shape, and password length, in that order.
    pub fn validate(self) -> Result<(String, String, String), AppError> {
        let (email, password, name) = match (self.email, self.password, self.name) {
            (Some(e), Some(p), Some(n)) if !e.is_empty() && !p.is_empty() && !n.is_empty() => {
                (e, p, n)
            }
            _ => return Err(AppError::BadRequest("All fields are required".into())),
        };

        if !EMAIL_REGEX.is_match(&email) {
            return Err(AppError::BadRequest("Invalid email format".into()));
        }

        if password.len() < 6 {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters".into(),
            ));
        }

        Ok((email, password, name))
    }
}

/// Payload for a login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(self) -> Result<(String, String), AppError> {
        match (self.email, self.password) {
            (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => Ok((e, p)),
            _ => Err(AppError::BadRequest(
                "Email and password are required".into(),
            )),
        }
    }
}

/// Response for successful signup and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    /// The signed identity token, valid for 24 hours.
    pub token: String,
    pub user: PublicUser,
}

/// Response for a successful token verification.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: Option<&str>, password: Option<&str>, name: Option<&str>) -> SignupRequest {
        SignupRequest {
            email: email.map(String::from),
            password: password.map(String::from),
            name: name.map(String::from),
        }
    }

    #[test]
    fn test_signup_validation_accepts_well_formed_input() {
        let req = signup(Some("test@example.com"), Some("password123"), Some("Test"));
        let (email, password, name) = req.validate().unwrap();
        assert_eq!(email, "test@example.com");
        assert_eq!(password, "password123");
        assert_eq!(name, "Test");
    }

    #[test]
    fn test_signup_validation_requires_all_fields() {
        for req in [
            signup(None, Some("password123"), Some("Test")),
            signup(Some("test@example.com"), None, Some("Test")),
            signup(Some("test@example.com"), Some("password123"), None),
            signup(Some(""), Some("password123"), Some("Test")),
        ] {
            match req.validate() {
                Err(AppError::BadRequest(msg)) => assert_eq!(msg, "All fields are required"),
                other => panic!("expected BadRequest, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_signup_validation_rejects_bad_email_shape() {
        for bad in ["testexample.com", "test@example", "a b@example.com", "@example.com"] {
            let req = signup(Some(bad), Some("password123"), Some("Test"));
            match req.validate() {
                Err(AppError::BadRequest(msg)) => {
                    assert_eq!(msg, "Invalid email format", "email: {}", bad)
                }
                other => panic!("expected BadRequest for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_signup_validation_rejects_short_password() {
        let req = signup(Some("test@example.com"), Some("12345"), Some("Test"));
        match req.validate() {
            Err(AppError::BadRequest(msg)) => {
                assert_eq!(msg, "Password must be at least 6 characters")
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_login_validation() {
        let ok = LoginRequest {
            email: Some("test@example.com".to_string()),
            password: Some("password123".to_string()),
        };
        assert!(ok.validate().is_ok());

        let missing = LoginRequest {
            email: Some("test@example.com".to_string()),
            password: None,
        };
        match missing.validate() {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Email and password are required"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }
}
