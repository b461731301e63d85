//! Bindings to the Chart.js global loaded by the host page.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    /// `window.Chart`
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;
}

/// Labels with one value each, in plotting order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            plugins: Plugins {
                legend: Legend { display: false },
            },
            scales: Scales {
                y: Axis { begin_at_zero: true },
            },
        }
    }
}

impl ChartConfig {
    pub fn bar(series: ChartSeries, label: &str, color: &str) -> Self {
        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: series.labels,
                datasets: vec![Dataset {
                    label: label.to_string(),
                    data: series.values,
                    background_color: Some(color.to_string()),
                    border_color: None,
                    fill: None,
                }],
            },
            options: ChartOptions::default(),
        }
    }

    pub fn line(series: ChartSeries, label: &str, color: &str) -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels: series.labels,
                datasets: vec![Dataset {
                    label: label.to_string(),
                    data: series.values,
                    background_color: None,
                    border_color: Some(color.to_string()),
                    fill: Some(false),
                }],
            },
            options: ChartOptions::default(),
        }
    }
}

/// Создаёт график Chart.js на canvas
pub fn render_chart(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<Chart, String> {
    let config_value = config
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())?;
    Chart::new(canvas, &config_value).map_err(|e| format!("{e:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series() -> ChartSeries {
        ChartSeries {
            labels: vec!["Alice".into(), "Bob".into()],
            values: vec![3, 1],
        }
    }

    #[test]
    fn test_bar_config_shape() {
        let value = serde_json::to_value(ChartConfig::bar(series(), "Number of Invoices", "#61dafb")).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "bar",
                "data": {
                    "labels": ["Alice", "Bob"],
                    "datasets": [{
                        "label": "Number of Invoices",
                        "data": [3, 1],
                        "backgroundColor": "#61dafb"
                    }]
                },
                "options": {
                    "responsive": true,
                    "plugins": { "legend": { "display": false } },
                    "scales": { "y": { "beginAtZero": true } }
                }
            })
        );
    }

    #[test]
    fn test_line_config_has_no_fill() {
        let value = serde_json::to_value(ChartConfig::line(series(), "Number of Invoices", "#4CAF50")).unwrap();
        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["datasets"][0]["borderColor"], "#4CAF50");
        assert_eq!(value["data"]["datasets"][0]["fill"], false);
        assert!(value["data"]["datasets"][0].get("backgroundColor").is_none());
    }
}
