use crate::dashboards::d400_invoice_overview::ui::InvoiceDashboard;
use crate::layout::Shell;
use crate::usecases::u501_upload_invoices::UploadInvoices;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state" style="padding: 40px; text-align: center; color: #888;">
            "Page not found"
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=UploadInvoices />
                    <Route path=path!("/dashboard") view=InvoiceDashboard />
                </Routes>
            </Shell>
        </Router>
    }
}
