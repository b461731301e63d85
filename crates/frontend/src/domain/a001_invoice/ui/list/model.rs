//! In-memory model behind the invoice table.
//!
//! Rows keep a direct index into the invoice collection, so the details
//! modal reads the source record instead of re-parsing rendered cells.

use crate::shared::date_utils::DateRange;
use crate::shared::list_utils::{sort_by_text, text_matches, Searchable};
use contracts::domain::a001_invoice::Invoice;

pub const COLUMNS: [&str; 7] = [
    "Serial Number",
    "Business Name",
    "Seller Name",
    "Address",
    "Customer Name",
    "Date",
    "Products",
];

pub const DATE_COLUMN: usize = 5;

/// Position of the source invoice in the collection
pub type RowKey = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
    pub key: RowKey,
    pub cells: [String; 7],
}

impl InvoiceRow {
    pub fn from_invoice(key: RowKey, invoice: &Invoice) -> Self {
        Self {
            key,
            cells: [
                invoice.customer_receipt_no.clone(),
                invoice.business_name.clone(),
                invoice.name.clone(),
                invoice.address.clone(),
                invoice.customer_name.clone(),
                invoice.date.clone(),
                invoice.products_summary(),
            ],
        }
    }

    /// Full rendered text of the row, cells separated by tabs
    pub fn text(&self) -> String {
        self.cells.join("\t")
    }

    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

impl Searchable for InvoiceRow {
    fn matches_filter(&self, filter: &str) -> bool {
        text_matches(&self.text(), filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceTable {
    invoices: Vec<Invoice>,
    rows: Vec<InvoiceRow>,
}

impl InvoiceTable {
    pub fn new(invoices: Vec<Invoice>) -> Self {
        let rows = invoices
            .iter()
            .enumerate()
            .map(|(key, invoice)| InvoiceRow::from_invoice(key, invoice))
            .collect();
        Self { invoices, rows }
    }

    /// Rows in display order
    pub fn rows(&self) -> &[InvoiceRow] {
        &self.rows
    }

    pub fn invoice(&self, key: RowKey) -> Option<&Invoice> {
        self.invoices.get(key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reorders every row (hidden ones too) by the text of one column, ascending
    pub fn sort_by_column(&mut self, column: usize) {
        if column >= COLUMNS.len() {
            return;
        }
        sort_by_text(&mut self.rows, |row| row.cell(column));
    }
}

/// Search query plus the applied date window; a row must pass both
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    pub query: String,
    pub date_range: DateRange,
}

impl RowFilter {
    pub fn is_visible(&self, row: &InvoiceRow) -> bool {
        row.matches_filter(&self.query) && self.date_range.contains_text(row.cell(DATE_COLUMN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_invoice::{InvoiceId, Product};

    fn invoice(id: i64, receipt: &str, seller: &str, customer: &str, date: &str) -> Invoice {
        Invoice {
            id: InvoiceId(id),
            customer_receipt_no: receipt.to_string(),
            business_name: "Shop".to_string(),
            name: seller.to_string(),
            address: "Main st.".to_string(),
            customer_name: customer.to_string(),
            date: date.to_string(),
            products: vec![Product {
                product_name: "Smithy Tea".to_string(),
                quantity: 2.0,
                rate: Some(1.5),
                total_price: 3.0,
            }],
        }
    }

    fn table() -> InvoiceTable {
        InvoiceTable::new(vec![
            invoice(1, "R-3", "Alice Smith", "Bob", "2024-01-15"),
            invoice(2, "R-1", "John Doe", "Carol", "2024-02-02"),
            invoice(3, "R-2", "zed", "Dan SMITH", "2023-12-31"),
        ])
    }

    fn visible_keys(table: &InvoiceTable, filter: &RowFilter) -> Vec<RowKey> {
        table
            .rows()
            .iter()
            .filter(|row| filter.is_visible(row))
            .map(|row| row.key)
            .collect()
    }

    #[test]
    fn test_row_cells() {
        let t = table();
        let row = &t.rows()[0];
        assert_eq!(row.cell(0), "R-3");
        assert_eq!(row.cell(DATE_COLUMN), "2024-01-15");
        assert_eq!(row.cell(6), "Smithy Tea x 2");
        assert_eq!(row.cell(42), "");
    }

    #[test]
    fn test_row_maps_back_to_invoice() {
        let mut t = table();
        t.sort_by_column(0);
        let first = &t.rows()[0];
        assert_eq!(first.cell(0), "R-1");
        assert_eq!(t.invoice(first.key).map(|i| i.id), Some(InvoiceId(2)));
    }

    #[test]
    fn test_duplicate_ids_keep_separate_rows() {
        let t = InvoiceTable::new(vec![
            invoice(5, "A", "x", "y", "2024-01-01"),
            invoice(5, "B", "x", "y", "2024-01-01"),
        ]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.invoice(1).map(|i| i.customer_receipt_no.as_str()), Some("B"));
    }

    #[test]
    fn test_search_matches_rendered_text() {
        let t = table();
        let filter = RowFilter {
            query: "smith".to_string(),
            ..Default::default()
        };
        // Every row embeds "Smithy Tea" in the product summary.
        assert_eq!(visible_keys(&t, &filter), vec![0, 1, 2]);

        let filter = RowFilter {
            query: "SMITH\t".to_string(),
            ..Default::default()
        };
        assert_eq!(visible_keys(&t, &filter), vec![0, 2]);

        let filter = RowFilter {
            query: "carol".to_string(),
            ..Default::default()
        };
        assert_eq!(visible_keys(&t, &filter), vec![1]);
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let t = table();
        assert_eq!(visible_keys(&t, &RowFilter::default()).len(), 3);
    }

    #[test]
    fn test_sort_by_column_non_decreasing() {
        let mut t = table();
        t.sort_by_column(2);
        let sellers: Vec<&str> = t.rows().iter().map(|r| r.cell(2)).collect();
        assert_eq!(sellers, vec!["Alice Smith", "John Doe", "zed"]);
    }

    #[test]
    fn test_sort_twice_is_idempotent() {
        let mut t = table();
        t.sort_by_column(5);
        let once: Vec<RowKey> = t.rows().iter().map(|r| r.key).collect();
        t.sort_by_column(5);
        let twice: Vec<RowKey> = t.rows().iter().map(|r| r.key).collect();
        assert_eq!(once, twice);
        assert_eq!(once, vec![2, 0, 1]);
    }

    #[test]
    fn test_sort_out_of_range_column_is_ignored() {
        let mut t = table();
        t.sort_by_column(7);
        assert_eq!(t.rows()[0].key, 0);
    }

    #[test]
    fn test_date_filter_january() {
        let t = table();
        let filter = RowFilter {
            date_range: DateRange::from_inputs("2024-01-01", "2024-01-31"),
            ..Default::default()
        };
        assert_eq!(visible_keys(&t, &filter), vec![0]);
    }

    #[test]
    fn test_search_and_date_filter_combine() {
        let t = table();
        let filter = RowFilter {
            query: "doe".to_string(),
            date_range: DateRange::from_inputs("2024-01-01", "2024-01-31"),
        };
        assert!(visible_keys(&t, &filter).is_empty());
    }
}
