//! TopHeader component - application top navigation bar.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Invoice Dashboard"</span>
            </div>

            // Both pages are rendered with fresh data by the server, so links reload
            <nav class="top-header__actions">
                <A href="/" attr:class="top-header__link" attr:rel="external">
                    {icon("upload")}
                    <span>"Upload"</span>
                </A>
                <A href="/dashboard" attr:class="top-header__link" attr:rel="external">
                    {icon("invoices")}
                    <span>"Dashboard"</span>
                </A>
            </nav>
        </div>
    }
}
