use dioxus::prelude::*;

/// One labelled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Bar heights as a percentage of the largest value. All zero when every
/// value is zero or negative.
pub fn bar_heights(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| if max > 0.0 { (v.max(0.0) / max) * 100.0 } else { 0.0 })
        .collect()
}

/// Vertical bar chart drawn with plain CSS.
#[component]
pub fn BarChart(title: String, bars: Vec<Bar>) -> Element {
    let values: Vec<f64> = bars.iter().map(|b| b.value).collect();
    let heights = bar_heights(&values);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "bar-chart",
            figcaption { class: "bar-chart-title", "{title}" }
            div { class: "bar-chart-plot",
                for (bar, height) in bars.iter().zip(heights) {
                    div { key: "{bar.label}", class: "bar-chart-column",
                        span { class: "bar-chart-value", "{bar.value}" }
                        div {
                            class: "bar-chart-bar",
                            style: "height: {height:.1}%",
                        }
                        span { class: "bar-chart-label", "{bar.label}" }
                    }
                }
            }
        }
    }
}
