use crate::shared::lenient;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// ID счёта (первичный ключ на сервере)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub i64);

/// Строка табличной части счёта
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::string")]
    pub product_name: String,

    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: f64,

    /// Цена за единицу; сервер присылает её не всегда
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    /// quantity * rate
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_price: f64,
}

/// Счёт, как его отдаёт страница дашборда. Только для чтения.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: InvoiceId,

    #[serde(default, deserialize_with = "lenient::string")]
    pub customer_receipt_no: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub business_name: String,

    /// Продавец
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub address: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub customer_name: String,

    /// Дата счёта (YYYY-MM-DD)
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,

    #[serde(default)]
    pub products: Vec<Product>,
}

impl Invoice {
    /// "Milk x 2, Bread x 1"
    pub fn products_summary(&self) -> String {
        self.products
            .iter()
            .map(|p| format!("{} x {}", p.product_name, p.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Сумма по всем строкам
    pub fn total_amount(&self) -> f64 {
        self.products.iter().map(|p| p.total_price).sum()
    }
}

/// Сводка по набору счетов для карточек на дашборде
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvoiceHighlights {
    pub total_invoices: usize,
    pub unique_sellers: usize,
    pub unique_customers: usize,
    pub unique_products: usize,
}

impl InvoiceHighlights {
    pub fn from_invoices(invoices: &[Invoice]) -> Self {
        let sellers: HashSet<&str> = invoices.iter().map(|i| i.name.as_str()).collect();
        let customers: HashSet<&str> = invoices.iter().map(|i| i.customer_name.as_str()).collect();
        let products: HashSet<&str> = invoices
            .iter()
            .flat_map(|i| i.products.iter().map(|p| p.product_name.as_str()))
            .collect();

        Self {
            total_invoices: invoices.len(),
            unique_sellers: sellers.len(),
            unique_customers: customers.len(),
            unique_products: products.len(),
        }
    }
}

/// Параметры серверной пагинации (страницы нумеруются с 1)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: usize,
    pub per_page: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {
            "id": 1,
            "customer_receipt_no": 1001,
            "business_name": "Corner Shop",
            "name": "Alice Smith",
            "address": null,
            "customer_name": "Bob",
            "date": "2024-01-05",
            "products": [
                {"product_name": "Milk", "quantity": 2, "rate": 1.5, "total_price": 3.0},
                {"product_name": "Bread", "quantity": 1, "total_price": 2.25}
            ]
        },
        {
            "id": 2,
            "customer_receipt_no": "R-2",
            "business_name": "Corner Shop",
            "name": "Alice Smith",
            "address": "Main st. 1",
            "customer_name": "Carol",
            "date": "2024-01-06",
            "products": [
                {"product_name": "Milk", "quantity": 1, "total_price": 1.5}
            ]
        },
        {
            "id": 3,
            "customer_receipt_no": "R-3",
            "business_name": "Kiosk",
            "name": "John Doe",
            "address": "",
            "customer_name": "Bob",
            "date": "2024-02-01"
        }
    ]"#;

    fn invoices() -> Vec<Invoice> {
        serde_json::from_str(PAYLOAD).unwrap()
    }

    #[test]
    fn test_parse_template_payload() {
        let list = invoices();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, InvoiceId(1));
        assert_eq!(list[0].customer_receipt_no, "1001");
        assert_eq!(list[0].address, "");
        assert_eq!(list[0].products[0].rate, Some(1.5));
        assert_eq!(list[0].products[1].rate, None);
        assert!(list[2].products.is_empty());
    }

    #[test]
    fn test_products_summary() {
        let list = invoices();
        assert_eq!(list[0].products_summary(), "Milk x 2, Bread x 1");
        assert_eq!(list[2].products_summary(), "");
        assert_eq!(list[0].total_amount(), 5.25);
    }

    #[test]
    fn test_highlights_count_distinct_values() {
        let h = InvoiceHighlights::from_invoices(&invoices());
        assert_eq!(
            h,
            InvoiceHighlights {
                total_invoices: 3,
                unique_sellers: 2,
                unique_customers: 2,
                unique_products: 2,
            }
        );
    }

    #[test]
    fn test_highlights_empty() {
        assert_eq!(InvoiceHighlights::from_invoices(&[]), InvoiceHighlights::default());
    }

    #[test]
    fn test_pagination_defaults() {
        let p: PaginationInfo = serde_json::from_str(r#"{"page": 2, "per_page": 30}"#).unwrap();
        assert_eq!(p.page, 2);
        assert_eq!(p.pages, 0);
    }
}
