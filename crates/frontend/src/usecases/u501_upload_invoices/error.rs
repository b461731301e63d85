use thiserror::Error;

/// Ошибки отправки файлов
#[derive(Debug, Error, PartialEq)]
pub enum UploadError {
    #[error("no files staged")]
    EmptySelection,

    #[error("upload already in progress")]
    InProgress,

    #[error("server answered HTTP {0}")]
    Http(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to build request: {0}")]
    Request(String),
}

impl UploadError {
    /// Текст уведомления для пользователя
    pub fn user_message(&self) -> &'static str {
        match self {
            UploadError::EmptySelection => "Please select at least one file.",
            UploadError::InProgress => "Upload is already in progress.",
            UploadError::Http(_) => "Failed to upload files.",
            UploadError::Network(_) | UploadError::Request(_) => {
                "An error occurred while uploading files."
            }
        }
    }

    /// Unexpected failures are worth an error-level log line
    pub fn is_exception(&self) -> bool {
        matches!(self, UploadError::Network(_) | UploadError::Request(_))
    }
}
