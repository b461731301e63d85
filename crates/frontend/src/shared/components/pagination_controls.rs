use crate::shared::icons::icon;
use leptos::prelude::*;

/// Navigation buttons of the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    First,
    Previous,
    Next,
    Last,
}

impl PageStep {
    const ALL: [PageStep; 4] = [PageStep::First, PageStep::Previous, PageStep::Next, PageStep::Last];

    /// Page the button leads to (1-based), `None` when it would stay put
    pub fn target(self, current: usize, pages: usize) -> Option<usize> {
        let page = match self {
            PageStep::First => 1,
            PageStep::Previous => current.saturating_sub(1).max(1),
            PageStep::Next => current.saturating_add(1).min(pages),
            PageStep::Last => pages,
        };
        (page >= 1 && page <= pages && page != current).then_some(page)
    }

    fn icon_name(self) -> &'static str {
        match self {
            PageStep::First => "chevrons-left",
            PageStep::Previous => "chevron-left",
            PageStep::Next => "chevron-right",
            PageStep::Last => "chevrons-right",
        }
    }

    fn title(self) -> &'static str {
        match self {
            PageStep::First => "First page",
            PageStep::Previous => "Previous page",
            PageStep::Next => "Next page",
            PageStep::Last => "Last page",
        }
    }
}

/// Server-side pager for the dashboard: every change is a new page load
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let step_button = move |step: PageStep| {
        let target = move || step.target(current_page.get(), total_pages.get());
        view! {
            <button
                class="pagination-btn"
                title=step.title()
                disabled=move || target().is_none()
                on:click=move |_| {
                    if let Some(page) = target() {
                        on_page_change.run(page);
                    }
                }
            >
                {icon(step.icon_name())}
            </button>
        }
    };
    let [first, previous, next, last] = PageStep::ALL.map(step_button);

    let size_options = page_size_options
        .into_iter()
        .map(|size| {
            view! {
                <option value=size.to_string() selected=move || page_size.get() == size>
                    {size.to_string()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="pagination-controls">
            {first}
            {previous}
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    current_page.get(),
                    total_pages.get().max(1),
                    total_count.get(),
                )}
            </span>
            {next}
            {last}
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {size_options}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page_targets() {
        assert_eq!(PageStep::First.target(3, 5), Some(1));
        assert_eq!(PageStep::Previous.target(3, 5), Some(2));
        assert_eq!(PageStep::Next.target(3, 5), Some(4));
        assert_eq!(PageStep::Last.target(3, 5), Some(5));
    }

    #[test]
    fn test_edges_disable_buttons() {
        assert_eq!(PageStep::First.target(1, 5), None);
        assert_eq!(PageStep::Previous.target(1, 5), None);
        assert_eq!(PageStep::Next.target(5, 5), None);
        assert_eq!(PageStep::Last.target(5, 5), None);
    }

    #[test]
    fn test_no_pages() {
        for step in PageStep::ALL {
            assert_eq!(step.target(1, 0), None);
        }
    }
}
