pub mod model;
pub mod state;

use self::model::{InvoiceRow, COLUMNS};
use self::state::create_state;
use crate::domain::a001_invoice::ui::details::InvoiceDetails;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::a001_invoice::Invoice;
use leptos::prelude::*;

/// Таблица счетов: поиск, сортировка по колонке, фильтр по датам, детали по клику
#[component]
pub fn InvoiceList(invoices: Vec<Invoice>) -> impl IntoView {
    let state = create_state(invoices);

    let close_details = Callback::new(move |_| state.update(|s| s.selected = None));

    let header_cells = COLUMNS
        .iter()
        .enumerate()
        .map(|(column, label)| {
            view! {
                <th
                    class="table__sortable-header"
                    style="cursor: pointer;"
                    on:click=move |_| state.update(|s| s.sort_by(column))
                >
                    {*label}
                    <span class=move || get_sort_class(state.with(|s| s.sort_column), column)>
                        {move || get_sort_indicator(state.with(|s| s.sort_column), column)}
                    </span>
                </th>
            }
        })
        .collect_view();

    let render_row = move |row: InvoiceRow| {
        let key = row.key;
        let row_for_filter = row.clone();
        let is_visible = move || state.with(|s| s.filter.is_visible(&row_for_filter));
        let cells = row
            .cells
            .into_iter()
            .map(|text| view! { <td>{text}</td> })
            .collect_view();

        view! {
            <tr
                class="invoice-row"
                style=move || if is_visible() { "cursor: pointer;" } else { "display: none;" }
                on:click=move |_| state.update(|s| s.selected = Some(key))
            >
                {cells}
            </tr>
        }
    };

    view! {
        <div class="invoice-list">
            <div class="invoice-list__toolbar" style="display: flex; gap: 15px; flex-wrap: wrap; align-items: flex-end; margin-bottom: 16px;">
                <div>
                    <label for="search-box" style="display: block; font-size: 0.875rem; margin-bottom: 4px;">"Search"</label>
                    <input
                        id="search-box"
                        type="text"
                        placeholder="Search invoices..."
                        style="width: 250px; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px;"
                        prop:value=move || state.with(|s| s.filter.query.clone())
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            state.update(|s| s.filter.query = query);
                        }
                    />
                </div>

                <div>
                    <label for="start-date" style="display: block; font-size: 0.875rem; margin-bottom: 4px;">"From"</label>
                    <input
                        id="start-date"
                        type="date"
                        style="padding: 6px; border-radius: 4px; border: 1px solid #ccc;"
                        prop:value=move || state.with(|s| s.date_from.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.date_from = value);
                        }
                    />
                </div>

                <div>
                    <label for="end-date" style="display: block; font-size: 0.875rem; margin-bottom: 4px;">"To"</label>
                    <input
                        id="end-date"
                        type="date"
                        style="padding: 6px; border-radius: 4px; border: 1px solid #ccc;"
                        prop:value=move || state.with(|s| s.date_to.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.date_to = value);
                        }
                    />
                </div>

                <div style="display: flex; gap: 10px;">
                    <button
                        id="filter-date"
                        class="button button--primary"
                        on:click=move |_| state.update(|s| s.apply_date_filter())
                    >
                        "Filter"
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || state.with(|s| !s.filter.date_range.is_active())
                        on:click=move |_| state.update(|s| s.reset_date_filter())
                    >
                        "Reset"
                    </button>
                </div>

                <span class="invoice-list__count" style="margin-left: auto; color: #666;">
                    {move || state.with(|s| format!("{} / {}", s.visible_count(), s.table.len()))}
                </span>
            </div>

            <div class="table-container">
                <table class="table__data invoice-table">
                    <thead>
                        <tr>{header_cells}</tr>
                    </thead>
                    <tbody id="invoice-table">
                        <For
                            each=move || state.with(|s| s.table.rows().to_vec())
                            key=|row| row.key
                            children=render_row
                        />
                    </tbody>
                </table>
                <Show when=move || state.with(|s| s.table.is_empty())>
                    <div class="empty-state" style="padding: 20px; text-align: center; color: #888;">
                        "No invoices yet"
                    </div>
                </Show>
            </div>

            {move || state.with(|s| s.selected_invoice()).map(|invoice| {
                view! { <InvoiceDetails invoice=invoice on_close=close_details /> }
            })}
        </div>
    }
}
