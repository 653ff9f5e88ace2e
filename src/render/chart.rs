//! Chart specifications
//!
//! A plotly-compatible figure description: traces plus layout. Front ends draw it; nothing
//! here knows how.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: FigureLayout) -> Self {
        Self { data, layout }
    }

    /// A figure with no traces and a centered message in place of the plot.
    pub fn placeholder(title: impl Into<String>, message: impl Into<String>) -> Self {
        let hidden = Axis {
            title: None,
            visible: Some(false),
        };
        Self {
            data: Vec::new(),
            layout: FigureLayout {
                title: Some(title.into()),
                xaxis: Some(hidden.clone()),
                yaxis: Some(hidden),
                annotations: vec![Annotation::centered(message)],
                ..FigureLayout::default()
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.data.is_empty() && !self.layout.annotations.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.layout.title.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Choropleth(ChoroplethTrace),
    Scatter(ScatterTrace),
    Bar(BarTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethTrace {
    pub locations: Vec<String>,
    /// `None` serializes as `null`, which plotly leaves unfilled.
    pub z: Vec<Option<f64>>,
    pub colorscale: String,
    pub colorbar: ColorBar,
    pub text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub thickness: u32,
    pub len: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub text: Vec<String>,
    pub mode: String,
    pub opacity: f64,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
}

impl Marker {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            size: None,
            line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FigureLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            visible: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub xref: String,
    pub yref: String,
    pub x: f64,
    pub y: f64,
    pub showarrow: bool,
}

impl Annotation {
    fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            x: 0.5,
            y: 0.5,
            showarrow: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_serializes_with_plotly_type_tag() {
        let trace = Trace::Bar(BarTrace {
            x: vec!["Female".into()],
            y: vec![3.0],
            marker: None,
        });
        assert_eq!(
            serde_json::to_value(&trace).unwrap(),
            json!({"type": "bar", "x": ["Female"], "y": [3.0]})
        );
    }

    #[test]
    fn test_placeholder_hides_axes_and_carries_message() {
        let fig = Figure::placeholder("Gender Breakdown", "No data for KEN");
        assert!(fig.is_placeholder());
        let value = serde_json::to_value(&fig).unwrap();
        assert_eq!(value["data"], json!([]));
        assert_eq!(value["layout"]["xaxis"]["visible"], json!(false));
        assert_eq!(value["layout"]["annotations"][0]["text"], "No data for KEN");
        assert!(value["layout"].get("height").is_none());
    }
}
