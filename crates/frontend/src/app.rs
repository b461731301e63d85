use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Client settings are read once from the host page and shared via context.
    provide_context(load_config());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
