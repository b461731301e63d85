use serde::{Deserialize, Serialize};

/// Ответ эндпоинта загрузки файлов.
///
/// Success: `{"message": "...", "file_paths": [...]}`, failure: `{"error": "..."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub file_paths: Vec<String>,
}

impl UploadResponse {
    /// Текст для лога: сообщение сервера или ошибка
    pub fn summary(&self) -> String {
        match (&self.error, &self.message) {
            (Some(err), _) => err.clone(),
            (None, Some(msg)) => format!("{} ({} files)", msg, self.file_paths.len()),
            (None, None) => format!("{} files", self.file_paths.len()),
        }
    }
}
