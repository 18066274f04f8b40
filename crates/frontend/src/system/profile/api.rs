use crate::shared::api_utils::{api_url, csrf_token};
use contracts::shared::SyncError;
use contracts::system::profile::{UpdateProfileDto, UpdateProfileResponse, CSRF_HEADER};
use gloo_net::http::Request;

/// Submit the profile form as `application/x-www-form-urlencoded`.
///
/// The CSRF token travels both in the body and in the header.
pub async fn update_profile(profile_url: &str, dto: &UpdateProfileDto) -> Result<(), SyncError> {
    let csrf = csrf_token();
    let body = serde_qs::to_string(&dto.to_form_fields(&csrf))
        .map_err(|e| SyncError::transport(format!("Failed to encode form: {}", e)))?;

    let response = Request::post(&api_url(profile_url))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header(CSRF_HEADER, &csrf)
        .header("X-Requested-With", "XMLHttpRequest")
        .body(body)
        .map_err(|e| SyncError::transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| SyncError::transport(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let result: UpdateProfileResponse = response
        .json()
        .await
        .map_err(|e| SyncError::transport(format!("HTTP {}: {}", status, e)))?;

    result.into_result()
}
