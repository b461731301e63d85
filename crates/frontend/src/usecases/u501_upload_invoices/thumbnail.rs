//! Client-side previews of staged files.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// `data:` URL of the image
    Image(String),
    /// Not an image, or the read failed
    Unavailable,
}

pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Читает содержимое файла и строит превью
pub async fn read_preview(file: &web_sys::File) -> Preview {
    let mime = file.type_();
    if !is_image(&mime) {
        return Preview::Unavailable;
    }
    match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => {
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
            Preview::Image(to_data_url(&mime, &bytes))
        }
        Err(e) => {
            log::warn!("Failed to read {}: {:?}", file.name(), e);
            Preview::Unavailable
        }
    }
}
