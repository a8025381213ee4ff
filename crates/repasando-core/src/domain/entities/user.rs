//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// The user record as persisted in the `users` table.
///
/// `id` is `None` until the store assigns one on insert. The password is
/// kept exactly as submitted; nothing hashes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-generated identity.
    #[serde(default)]
    pub id: Option<UserId>,

    /// Given name.
    pub name: String,

    /// Family name.
    pub last_name: String,

    /// Email address, unique across users.
    pub email: String,

    /// Login handle, unique across users.
    pub user_name: String,

    /// Plain-text password.
    pub password: String,
}

impl User {
    /// Creates a user that has not been persisted yet.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            last_name: last_name.into(),
            email: email.into(),
            user_name: user_name.into(),
            password: password.into(),
        }
    }

    /// Returns the same user carrying the given identity.
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Overwrites the profile fields. Identity and password are left alone.
    pub fn update_profile(
        &mut self,
        user_name: String,
        name: String,
        last_name: String,
        email: String,
    ) {
        self.user_name = user_name;
        self.name = name;
        self.last_name = last_name;
        self.email = email;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new("Ana", "Lopez", "ana@example.com", "analopez", "secret1")
    }

    #[test]
    fn test_new_user_is_not_persisted() {
        let user = create_test_user();
        assert!(user.id.is_none());
    }

    #[test]
    fn test_with_id() {
        let user = create_test_user().with_id(UserId(9));
        assert_eq!(user.id, Some(UserId(9)));
    }

    #[test]
    fn test_update_profile_keeps_password_and_id() {
        let mut user = create_test_user().with_id(UserId(1));
        user.update_profile(
            "newhandle".to_string(),
            "Maria".to_string(),
            "Diaz".to_string(),
            "maria@example.com".to_string(),
        );

        assert_eq!(user.id, Some(UserId(1)));
        assert_eq!(user.user_name, "newhandle");
        assert_eq!(user.name, "Maria");
        assert_eq!(user.last_name, "Diaz");
        assert_eq!(user.email, "maria@example.com");
        assert_eq!(user.password, "secret1");
    }

    #[test]
    fn test_json_uses_camel_case() {
        let user = create_test_user().with_id(UserId(5));
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 5);
        assert_eq!(json["lastName"], "Lopez");
        assert_eq!(json["userName"], "analopez");
        assert_eq!(json["password"], "secret1");
    }

    #[test]
    fn test_deserialize_without_id() {
        let json = r#"{"name":"A","lastName":"B","email":"a@b.com","userName":"ab","password":"123456"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.id.is_none());
        assert_eq!(user.user_name, "ab");
    }
}
