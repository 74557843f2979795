use contracts::api::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with username and password (DRF token endpoint)
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api-token-auth/"))
        .json(&request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Get current user info (validates the stored token)
pub async fn get_current_user(token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&api_url("/user-info/"))
        .header("Authorization", &format!("Token {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
