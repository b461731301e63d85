use super::charts::ChartCanvas;
use crate::dashboards::d400_invoice_overview::aggregate::{invoices_over_time, top_sellers};
use crate::domain::a001_invoice::ui::list::InvoiceList;
use crate::shared::chart::ChartConfig;
use crate::shared::components::{PaginationControls, StatCard};
use crate::shared::config::ClientConfig;
use crate::shared::notify::navigate_to;
use crate::shared::page_data::{load_invoices, load_pagination};
use contracts::domain::a001_invoice::InvoiceHighlights;
use leptos::prelude::*;
use serde::Serialize;

const DATASET_LABEL: &str = "Number of Invoices";

#[derive(Serialize)]
struct PageQuery {
    page: usize,
    per_page: usize,
}

/// URL of another dashboard page; the server paginates
pub fn page_url(base: &str, page: usize, per_page: usize) -> String {
    match serde_qs::to_string(&PageQuery { page, per_page }) {
        Ok(query) => format!("{}?{}", base, query),
        Err(e) => {
            log::warn!("Failed to encode page query: {}", e);
            base.to_string()
        }
    }
}

/// Invoice dashboard: highlights, charts, table
#[component]
pub fn InvoiceDashboard() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let invoices = load_invoices();
    let pagination = load_pagination();

    let highlights = InvoiceHighlights::from_invoices(&invoices);
    let top_sellers_chart = ChartConfig::bar(
        top_sellers(&invoices, config.dashboard.top_sellers_limit),
        DATASET_LABEL,
        "#61dafb",
    );
    let over_time_chart = ChartConfig::line(invoices_over_time(&invoices), DATASET_LABEL, "#4CAF50");

    let pagination_view = pagination.map(|p| {
        let base = config.dashboard.path.clone();
        let base_for_size = base.clone();
        let per_page = p.per_page;

        view! {
            <PaginationControls
                current_page=Signal::stored(p.page)
                total_pages=Signal::stored(p.pages)
                total_count=Signal::stored(p.total)
                page_size=Signal::stored(p.per_page)
                on_page_change=Callback::new(move |page| navigate_to(&page_url(&base, page, per_page)))
                on_page_size_change=Callback::new(move |size| navigate_to(&page_url(&base_for_size, 1, size)))
                page_size_options=config.dashboard.page_size_options.clone()
            />
        }
    });

    view! {
        <div id="d400_invoice_overview--dashboard" class="dashboard">
            <div class="page-header">
                <h1 class="page-header__title">"Invoice Dashboard"</h1>
            </div>

            <div class="stat-cards">
                <StatCard label="Total Invoices" icon_name="invoices" value_id="total-invoices"
                    value=Signal::stored(highlights.total_invoices) />
                <StatCard label="Unique Sellers" icon_name="sellers" value_id="unique-sellers"
                    value=Signal::stored(highlights.unique_sellers) />
                <StatCard label="Unique Customers" icon_name="customers" value_id="unique-customers"
                    value=Signal::stored(highlights.unique_customers) />
                <StatCard label="Unique Products" icon_name="products" value_id="unique-products"
                    value=Signal::stored(highlights.unique_products) />
            </div>

            <div class="charts">
                <ChartCanvas canvas_id="top-sellers-chart" title="Top Sellers" config=top_sellers_chart />
                <ChartCanvas canvas_id="invoices-over-time-chart" title="Invoices Over Time" config=over_time_chart />
            </div>

            <InvoiceList invoices=invoices />

            {pagination_view}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("/dashboard", 2, 30), "/dashboard?page=2&per_page=30");
        assert_eq!(page_url("/dashboard", 1, 100), "/dashboard?page=1&per_page=100");
    }
}
