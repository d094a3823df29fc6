use contracts::system::auth::{LoginRequest, LoginResponse, PasswordResetRequest, RegisterRequest};

use crate::shared::api_utils::{post_public, post_public_json, ApiError};

/// Exchange credentials for a bearer token
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_public_json("/api/auth/login", &request).await
}

/// Create a store account; the created user record is not needed
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    post_public("/api/auth/register", request).await.map(|_| ())
}

/// Ask the server to mail a password reset link
pub async fn request_password_reset(email: String) -> Result<(), ApiError> {
    let request = PasswordResetRequest { email };
    post_public("/api/auth/password-reset-request", &request)
        .await
        .map(|_| ())
}
