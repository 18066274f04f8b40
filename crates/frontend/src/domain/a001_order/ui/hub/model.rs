use crate::shared::api_utils::{api_url, csrf_token};
use contracts::domain::a001_order::upload::DOCUMENT_FIELD;
use contracts::domain::a001_order::{UploadOutcome, UploadResponse};
use contracts::shared::SyncError;
use contracts::system::profile::CSRF_FIELD;
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// Send the document to the analysis endpoint and read back its page count.
///
/// Non-2xx responses are still parsed: the backend reports rejections as
/// `{"success": false, "message": ...}` with an error status.
pub async fn analyze_document(upload_url: &str, file: &File) -> UploadOutcome {
    let form_data = FormData::new().map_err(|e| SyncError::transport(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename(DOCUMENT_FIELD, file, &file.name())
        .map_err(|e| SyncError::transport(format!("{e:?}")))?;
    form_data
        .append_with_str(CSRF_FIELD, &csrf_token())
        .map_err(|e| SyncError::transport(format!("{e:?}")))?;

    let response = Request::post(&api_url(upload_url))
        .header("X-Requested-With", "XMLHttpRequest")
        .body(form_data)
        .map_err(|e| SyncError::transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| SyncError::transport(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let body: UploadResponse = response
        .json()
        .await
        .map_err(|e| SyncError::transport(format!("HTTP {}: {}", status, e)))?;

    body.into_outcome()
}
