pub mod api;
pub mod error;
pub mod staging;
pub mod state;
pub mod thumbnail;
pub mod view;

pub use view::UploadInvoices;
