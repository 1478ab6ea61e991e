//! Request and response types for the auth API calls. Login payloads carry
//! credentials and the issued bearer token, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginUser {
    pub email: String,
    pub role: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Success payload for `/auth/login`; `user` and `access_token` together
/// hydrate the session triple.
pub struct LoginResponse {
    pub user: LoginUser,
    pub access_token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub role: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidateResetTokenRequest {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::{LoginResponse, RegisterRequest};

    #[test]
    fn test_login_response_deserialization() {
        let json = r#"{"user":{"email":"a@b.com","role":"admin"},"access_token":"T"}"#;

        let response: LoginResponse = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.user.email, "a@b.com");
        assert_eq!(response.user.role, "admin");
        assert_eq!(response.access_token, "T");
    }

    #[test]
    fn test_register_request_field_naming() {
        let request = RegisterRequest {
            name: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@b.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            role: "customer".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains(r#""confirmPassword":"secret1""#));
        assert!(json.contains(r#""role":"customer""#));
    }
}
