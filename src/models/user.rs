//! User schemas.
//!
//! - `User`: user record as returned by the gateway
//! - `CreateUserRequest`: body of `POST /api/v1/users`
//! - `GetUserResponse`, `CreateUserResponse`: response envelopes

use serde::{Deserialize, Serialize};

use crate::fakers::FAKE;

/// User data returned by the gateway.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "9259ff0e-a3f6-45a7-97e6-50e20ef77bed",
///   "email": "user@example.com",
///   "lastName": "Smith",
///   "firstName": "Tom",
///   "middleName": "B.",
///   "phoneNumber": "123-456-78-90"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone_number: String,
}

/// Request body for creating a new user.
///
/// Built with snake_case fields in Rust, sent as camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone_number: String,
}

impl CreateUserRequest {
    /// Request filled with random data and a unique email.
    pub fn fake() -> Self {
        Self {
            email: FAKE.email(),
            last_name: FAKE.last_name(),
            first_name: FAKE.first_name(),
            middle_name: FAKE.middle_name(),
            phone_number: FAKE.phone_number(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: User,
}

/// Users list, returned by the mock gateway's `GET /api/v1/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUsersResponse {
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_user_request_serializes_camel_case() {
        let request = CreateUserRequest {
            email: "user@example.com".to_string(),
            last_name: "Smith".to_string(),
            first_name: "Tom".to_string(),
            middle_name: "B.".to_string(),
            phone_number: "123-456-78-90".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "email": "user@example.com",
                "lastName": "Smith",
                "firstName": "Tom",
                "middleName": "B.",
                "phoneNumber": "123-456-78-90"
            })
        );
    }

    #[test]
    fn get_user_response_parses_gateway_payload() {
        let body = r#"{"user":{"id":"1","email":"a@b.c","lastName":"L","firstName":"F","middleName":"M","phoneNumber":"1"}}"#;
        let response: GetUserResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.user.id, "1");
        assert_eq!(response.user.last_name, "L");
    }
}
