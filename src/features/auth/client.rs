//! Client wrappers for the backend auth endpoints. These helpers centralize
//! paths and payload shapes, keeping request logic out of the screens and
//! preventing credential leakage in route code.

use crate::{
    app_lib::{AppError, post_json_with_headers, post_json_with_headers_response},
    features::auth::types::{
        ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest,
        ValidateResetTokenRequest,
    },
};

/// Exchanges credentials for the user identity and bearer token.
/// The response hydrates the session store; never log the payload.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json_with_headers_response("/auth/login", request, &[]).await
}

/// Creates a new account. The backend sends the verification email;
/// duplicate emails surface through the failure path.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    post_json_with_headers("/users", request, &[]).await
}

/// Requests a password-reset link for the given email.
pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<(), AppError> {
    post_json_with_headers("/users/forgot-password", request, &[]).await
}

/// Checks whether a reset token is still valid. Failure is the validity
/// signal; the body is otherwise opaque.
pub async fn validate_reset_token(request: &ValidateResetTokenRequest) -> Result<(), AppError> {
    post_json_with_headers("/users/validate-reset-token", request, &[]).await
}

/// Sets a new password using a previously validated reset token.
/// Never log the request payload.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), AppError> {
    post_json_with_headers("/users/reset-password", request, &[]).await
}
