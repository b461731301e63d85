pub mod aggregate;
pub mod ui;
