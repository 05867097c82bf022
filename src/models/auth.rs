use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Successful login body: `{ "data": { "token": "..." } }`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub data: TokenData,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenData {
    pub token: String,
}

/// Error body. Every field is optional, the server may send anything.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_reads_nested_token() {
        let body = r#"{"data":{"token":"abc123","user":{"id":7}},"success":true}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.token, "abc123");
    }

    #[test]
    fn login_response_without_token_is_rejected() {
        let body = r#"{"data":{}}"#;
        assert!(serde_json::from_str::<LoginResponse>(body).is_err());
    }

    #[test]
    fn error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"status":409}"#).unwrap();
        assert_eq!(body.message, None);

        let body: ErrorBody = serde_json::from_str(r#"{"message":"User exists"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("User exists"));
    }

    #[test]
    fn register_request_serializes_all_three_fields() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
            email: "alice@example.com".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "username": "alice",
                "password": "pw",
                "email": "alice@example.com",
            })
        );
    }
}
