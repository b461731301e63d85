use crate::shared::icons::icon;
use leptos::prelude::*;

/// Целое число с неразрывным пробелом между тысячами
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// DOM id of the value element (part of the page contract)
    #[prop(into)]
    value_id: String,
    /// Count to display
    #[prop(into)]
    value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value" id=value_id>
                    {move || format_count(value.get())}
                </div>
            </div>
        </div>
    }
}
