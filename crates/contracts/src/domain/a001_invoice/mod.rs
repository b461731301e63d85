pub mod aggregate;

pub use aggregate::{Invoice, InvoiceHighlights, InvoiceId, PaginationInfo, Product};
