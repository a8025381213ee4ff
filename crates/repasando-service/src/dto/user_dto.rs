//! User-related DTOs.

use repasando_core::rules::not_blank;
use repasando_core::{User, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Payload for creating or replacing a user.
///
/// Missing and `null` fields deserialize as empty strings and then fail
/// their `required` rule. A client supplied `id` is accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRequest {
    #[schema(value_type = Option<i64>)]
    pub id: Option<UserId>,

    #[validate(custom(function = "not_blank", message = "name is required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "last name is required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,

    #[validate(
        custom(function = "not_blank", message = "email is required"),
        email(message = "enter a valid email format")
    )]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "username is required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub user_name: String,

    #[validate(
        custom(function = "not_blank", message = "password is required"),
        length(min = 6, message = "password must be at least 6 characters")
    )]
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

impl UserRequest {
    /// Builds a user the store has not seen yet.
    #[must_use]
    pub fn into_new_user(self) -> User {
        User::new(
            self.name,
            self.last_name,
            self.email,
            self.user_name,
            self.password,
        )
    }

    /// Copies the profile fields onto an existing user.
    pub fn apply_to(self, user: &mut User) {
        user.update_profile(self.user_name, self.name, self.last_name, self.email);
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
