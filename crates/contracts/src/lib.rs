//! Wire types shared between the invoice server and the browser client.

pub mod domain;
pub mod shared;
pub mod usecases;
