use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::crud::ApiError;

async fn check(response: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    if response.status() == 401 {
        return Err(ApiError::Unauthenticated);
    }
    Err(ApiError::Status {
        status: response.status(),
        message: response.text().await.unwrap_or_default(),
    })
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check(response)
        .await?
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/auth/refresh"))
        .json(&request)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check(response)
        .await?
        .json::<RefreshResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/auth/logout"))
        .json(&request)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check(response).await.map(|_| ())
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&api_url("/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check(response)
        .await?
        .json::<UserInfo>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
