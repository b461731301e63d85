use crate::shared::chart::{render_chart, Chart, ChartConfig};
use leptos::html;
use leptos::prelude::*;

/// Canvas that turns into a Chart.js chart once mounted.
#[component]
pub fn ChartCanvas(
    /// DOM id of the canvas (part of the page contract)
    #[prop(into)]
    canvas_id: String,
    #[prop(into)]
    title: String,
    config: ChartConfig,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    // Chart is a JS object, keep it off the reactive graph's Send storage
    let chart = StoredValue::new_local(None::<Chart>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if chart.with_value(|c| c.is_some()) {
            return;
        }
        match render_chart(&canvas, &config) {
            Ok(c) => chart.set_value(Some(c)),
            Err(e) => log::error!("Failed to build chart #{}: {}", canvas.id(), e),
        }
    });

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <canvas id=canvas_id node_ref=canvas_ref></canvas>
        </div>
    }
}
