//! User entity and its request/response shapes
//!
//! One Rust type per wire shape: the same structs drive serde
//! serialization and the OpenAPI component schemas, so the documented
//! contract cannot drift from the runtime behavior.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use utoipa::ToSchema;

/// Storage shape of a user, as read from the `user` table
///
/// SurrealDB returns the record id as a typed [`RecordId`]; only the
/// repository layer sees this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Record id assigned by the store at creation
    pub id: RecordId,
    /// Display name
    pub name: String,
}

/// API representation of a user: `{"id": "...", "name": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier, serialized as a string
    #[schema(example = "h5fjq2v0mc8pw1zd93xk")]
    pub id: String,
    /// Display name
    #[schema(example = "Alice")]
    pub name: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.key().to_string(),
            name: record.name,
        }
    }
}

/// Body of `POST /users`
///
/// `name` is optional at the deserialization level so that its absence can
/// be reported as a validation error rather than a body-rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name; required, but the empty string is accepted
    #[schema(example = "Alice")]
    pub name: Option<String>,
}

/// Body of `PUT /users/{id}`
///
/// No presence check is applied on this path: an absent `name` overwrites
/// the stored value with the empty string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// Replacement display name
    #[schema(example = "Bob")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_shape() {
        let user = User {
            id: "abc123".to_string(),
            name: "Alice".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, serde_json::json!({"id": "abc123", "name": "Alice"}));
    }

    #[test]
    fn test_user_from_record_renders_key_only() {
        let record = UserRecord {
            id: RecordId::from(("user", "abc123")),
            name: "Alice".to_string(),
        };
        let user = User::from(record);
        // The table prefix must not leak into the public id
        assert_eq!(user.id, "abc123");
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn test_create_request_name_is_optional() {
        let req: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());

        let req: CreateUserRequest = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(req.name.is_none());

        let req: CreateUserRequest = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Alice"));

        // Empty string is accepted, not rejected
        let req: CreateUserRequest = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some(""));
    }

    #[test]
    fn test_update_request_tolerates_missing_name() {
        let req: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
    }
}
