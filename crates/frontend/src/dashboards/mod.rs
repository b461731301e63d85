pub mod d400_invoice_overview;
