//! Bar chart figure for the unity check series

use serde_json::{json, Value};

use crate::model::BatchResult;

pub const CHART_TITLE: &str = "Unity Check [%]";

/// Build a plotly-style bar chart figure: one bar per case, colored by status
pub fn bar_chart(batch: &BatchResult) -> Value {
    let x: Vec<&str> = batch.series.iter().map(|p| p.label.as_str()).collect();
    let y: Vec<f64> = batch.series.iter().map(|p| p.unity_check).collect();
    let colors: Vec<&str> = batch.series.iter().map(|p| p.color.as_str()).collect();

    json!({
        "data": [{
            "type": "bar",
            "x": x,
            "y": y,
            "marker": { "color": colors },
        }],
        "layout": {
            "title": { "text": CHART_TITLE },
        },
    })
}
