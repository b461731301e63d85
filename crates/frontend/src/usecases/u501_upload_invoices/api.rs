use super::error::UploadError;
use crate::shared::config::UploadConfig;
use contracts::usecases::u501_upload_invoices::UploadResponse;
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// Отправить все файлы одним multipart-запросом
pub async fn upload_files(config: &UploadConfig, files: &[File]) -> Result<UploadResponse, UploadError> {
    let form_data = FormData::new().map_err(|e| UploadError::Request(format!("{e:?}")))?;
    for file in files {
        form_data
            .append_with_blob_and_filename(&config.field_name, file, &file.name())
            .map_err(|e| UploadError::Request(format!("{e:?}")))?;
    }

    let response = Request::post(&config.endpoint)
        .body(form_data)
        .map_err(|e| UploadError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(UploadError::Http(response.status()));
    }

    // The body is informational only; an unexpected shape is not a failure
    match response.json::<UploadResponse>().await {
        Ok(body) => Ok(body),
        Err(e) => {
            log::debug!("Upload response body not understood: {}", e);
            Ok(UploadResponse::default())
        }
    }
}
