pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Каркас страницы: верхняя панель и контент
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |           content            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">{children()}</main>
        </div>
    }
}
