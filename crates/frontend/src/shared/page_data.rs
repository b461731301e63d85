//! Data the server renders into the host page.
//!
//! The dashboard template embeds the invoice list (and optionally the
//! pagination state) as JSON inside `<script>` elements; the client reads
//! them once at mount time.

use contracts::domain::a001_invoice::{Invoice, PaginationInfo};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const INVOICE_DATA_ID: &str = "invoice-data";
pub const PAGINATION_DATA_ID: &str = "pagination-data";

#[derive(Debug, Error, PartialEq)]
pub enum PageDataError {
    #[error("document is not available")]
    NoDocument,

    #[error("element #{0} not found")]
    Missing(String),

    #[error("element #{id} is malformed: {reason}")]
    Malformed { id: String, reason: String },
}

/// Текстовое содержимое элемента по id
pub fn read_element_text(id: &str) -> Result<String, PageDataError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PageDataError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| PageDataError::Missing(id.to_string()))?;
    Ok(element.text_content().unwrap_or_default())
}

pub fn parse_json<T: DeserializeOwned>(id: &str, text: &str) -> Result<T, PageDataError> {
    serde_json::from_str(text.trim()).map_err(|e| PageDataError::Malformed {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

pub fn read_json<T: DeserializeOwned>(id: &str) -> Result<T, PageDataError> {
    let text = read_element_text(id)?;
    parse_json(id, &text)
}

/// Invoice data is trusted; a broken payload degrades to an empty dashboard.
pub fn load_invoices() -> Vec<Invoice> {
    match read_json::<Vec<Invoice>>(INVOICE_DATA_ID) {
        Ok(invoices) => {
            log::debug!("Loaded {} invoices from page", invoices.len());
            invoices
        }
        Err(e) => {
            log::error!("Failed to load invoices: {}", e);
            Vec::new()
        }
    }
}

/// `null` (or a blank element) means the page is not paginated
pub fn parse_pagination(text: &str) -> Result<Option<PaginationInfo>, PageDataError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_json(PAGINATION_DATA_ID, text)
}

pub fn load_pagination() -> Option<PaginationInfo> {
    match read_element_text(PAGINATION_DATA_ID).and_then(|text| parse_pagination(&text)) {
        Ok(p) => p,
        Err(PageDataError::Missing(_)) => None,
        Err(e) => {
            log::warn!("Ignoring pagination data: {}", e);
            None
        }
    }
}
