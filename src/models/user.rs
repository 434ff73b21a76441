use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A user record as stored in the `users` table.
///
/// `password_hash` never leaves the process; responses carry a [`PublicUser`]
/// instead. `created_at` is set once at signup, `last_login` starts out null
/// and is updated on each successful login.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// The user shape returned by the API: id, email, and display name only.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_hides_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            name: "Test User".to_string(),
            created_at: Utc::now(),
            last_login: None,
        };

        let public = PublicUser::from(&user);
        let json = serde_json::to_value(&public).unwrap();

        assert_eq!(json["email"], "test@example.com");
        assert_eq!(json["name"], "Test User");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
