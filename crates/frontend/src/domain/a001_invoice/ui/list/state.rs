use super::model::{InvoiceTable, RowFilter, RowKey};
use crate::shared::date_utils::DateRange;
use contracts::domain::a001_invoice::Invoice;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct InvoiceListState {
    pub table: InvoiceTable,
    pub filter: RowFilter,
    pub sort_column: Option<usize>,
    // Raw values of the date inputs (applied only on "Filter")
    pub date_from: String,
    pub date_to: String,
    /// Row opened in the details modal
    pub selected: Option<RowKey>,
}

impl InvoiceListState {
    pub fn new(invoices: Vec<Invoice>) -> Self {
        Self {
            table: InvoiceTable::new(invoices),
            ..Default::default()
        }
    }

    pub fn sort_by(&mut self, column: usize) {
        self.table.sort_by_column(column);
        self.sort_column = Some(column);
    }

    pub fn apply_date_filter(&mut self) {
        self.filter.date_range = DateRange::from_inputs(&self.date_from, &self.date_to);
    }

    pub fn reset_date_filter(&mut self) {
        self.date_from.clear();
        self.date_to.clear();
        self.filter.date_range = DateRange::default();
    }

    pub fn selected_invoice(&self) -> Option<Invoice> {
        self.selected.and_then(|key| self.table.invoice(key).cloned())
    }

    pub fn visible_count(&self) -> usize {
        self.table
            .rows()
            .iter()
            .filter(|row| self.filter.is_visible(row))
            .count()
    }
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state(invoices: Vec<Invoice>) -> RwSignal<InvoiceListState> {
    RwSignal::new(InvoiceListState::new(invoices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_invoice::InvoiceId;

    fn invoice(id: i64, date: &str) -> Invoice {
        Invoice {
            id: InvoiceId(id),
            customer_receipt_no: format!("R-{id}"),
            business_name: String::new(),
            name: String::new(),
            address: String::new(),
            customer_name: String::new(),
            date: date.to_string(),
            products: Vec::new(),
        }
    }

    #[test]
    fn test_date_inputs_apply_only_on_demand() {
        let mut state = InvoiceListState::new(vec![invoice(1, "2024-01-10"), invoice(2, "2024-03-01")]);
        state.date_from = "2024-01-01".to_string();
        state.date_to = "2024-01-31".to_string();
        assert_eq!(state.visible_count(), 2);

        state.apply_date_filter();
        assert_eq!(state.visible_count(), 1);

        state.reset_date_filter();
        assert_eq!(state.visible_count(), 2);
        assert!(state.date_from.is_empty());
    }

    #[test]
    fn test_selected_invoice_survives_sorting() {
        let mut state = InvoiceListState::new(vec![invoice(1, "2024-02-01"), invoice(2, "2024-01-01")]);
        state.selected = Some(state.table.rows()[0].key);
        state.sort_by(5);
        assert_eq!(state.sort_column, Some(5));
        assert_eq!(state.selected_invoice().map(|i| i.id), Some(InvoiceId(1)));
    }
}
