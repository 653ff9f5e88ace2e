//! World map colored by the selected metric

use super::chart::{ChoroplethTrace, ColorBar, Figure, FigureLayout, Trace};
use super::{Artifact, RenderContext};
use crate::consts::cli_consts::{CHOROPLETH_HEIGHT, CHOROPLETH_WIDTH};
use crate::state::Metric;

/// Plotly colorscale name for `metric`: warm for poverty, cool for inequality.
pub fn colorscale(metric: Metric) -> &'static str {
    match metric {
        Metric::Mpi => "Reds",
        Metric::Gii => "Blues",
    }
}

fn colorbar(metric: Metric) -> ColorBar {
    let x = match metric {
        Metric::Mpi => 0.95,
        Metric::Gii => 0.85,
    };
    ColorBar {
        thickness: 10,
        len: 0.65,
        x,
        y: 0.5,
    }
}

/// Depends only on the metric, never on the selection.
pub fn render(ctx: &RenderContext<'_>) -> Artifact {
    let metric = ctx.state.metric();
    let countries = ctx.dataset.countries();

    let trace = ChoroplethTrace {
        locations: countries.iter().map(|c| c.iso.to_string()).collect(),
        z: countries.iter().map(|c| metric.value_of(c)).collect(),
        colorscale: colorscale(metric).to_string(),
        colorbar: colorbar(metric),
        text: countries.iter().map(|c| c.country.clone()).collect(),
    };

    Artifact::Figure(Figure::new(
        vec![Trace::Choropleth(trace)],
        FigureLayout {
            title: Some(format!("{} by Country", metric)),
            height: Some(CHOROPLETH_HEIGHT),
            width: Some(CHOROPLETH_WIDTH),
            ..FigureLayout::default()
        },
    ))
}
