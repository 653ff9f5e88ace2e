//! GII vs MPI scatter with the selected country highlighted

use super::chart::{Axis, Figure, FigureLayout, Marker, MarkerLine, ScatterTrace, Trace};
use super::{Artifact, RenderContext};
use crate::consts::cli_consts::{BASE_POINT_COLOR, HIGHLIGHT_COLOR};
use crate::dataset::CountryRecord;

const TITLE: &str = "Gender Inequality Index vs. Multidimensional Poverty Index";

fn series<'a>(
    records: impl Iterator<Item = &'a CountryRecord> + Clone,
    marker: Marker,
) -> Trace {
    Trace::Scatter(ScatterTrace {
        x: records.clone().map(|c| c.gii).collect(),
        y: records.clone().map(|c| c.mpi).collect(),
        text: records.map(|c| c.country.clone()).collect(),
        mode: "markers".to_string(),
        opacity: 0.7,
        marker,
    })
}

pub fn render(ctx: &RenderContext<'_>) -> Artifact {
    let Some(iso) = ctx.state.selection() else {
        return Artifact::Empty;
    };
    let Some(selected) = ctx.dataset.country(iso) else {
        return Artifact::Figure(Figure::placeholder(TITLE, format!("No data for {}", iso)));
    };

    let everyone = series(
        ctx.dataset.countries().iter(),
        Marker {
            color: BASE_POINT_COLOR.to_string(),
            size: Some(10),
            line: Some(MarkerLine {
                width: 0.2,
                color: "white".to_string(),
            }),
        },
    );
    let highlight = series(
        std::iter::once(selected),
        Marker {
            color: HIGHLIGHT_COLOR.to_string(),
            size: Some(10),
            line: Some(MarkerLine {
                width: 2.0,
                color: "Black".to_string(),
            }),
        },
    );

    Artifact::Figure(Figure::new(
        vec![everyone, highlight],
        FigureLayout {
            title: Some(format!("{} for {}", TITLE, selected.country)),
            xaxis: Some(Axis::titled("Gender Inequality Index")),
            yaxis: Some(Axis::titled("Multidimensional Poverty Index")),
            hovermode: Some("closest".to_string()),
            showlegend: Some(false),
            ..FigureLayout::default()
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ViewId;
    use crate::render::testing::{Harness, figure};
    use crate::state::Metric;

    fn scatter(trace: &Trace) -> &ScatterTrace {
        match trace {
            Trace::Scatter(s) => s,
            other => panic!("unexpected trace {other:?}"),
        }
    }

    #[test]
    fn test_selected_country_is_replotted_in_highlight() {
        let fig = figure(Harness::selecting("MLI").render(ViewId::Scatter));
        assert_eq!(fig.data.len(), 2);

        let all = scatter(&fig.data[0]);
        assert_eq!(all.x.len(), 4);
        assert_eq!(all.marker.color, "#999999");

        let picked = scatter(&fig.data[1]);
        assert_eq!(picked.text, vec!["Mali"]);
        assert_eq!(picked.x, vec![Some(0.678)]);
        assert_eq!(picked.y, vec![Some(0.457)]);
        assert_eq!(picked.marker.color, "#3D9970");
        assert_eq!(picked.marker.line.as_ref().unwrap().width, 2.0);

        assert_eq!(
            fig.title(),
            Some("Gender Inequality Index vs. Multidimensional Poverty Index for Mali")
        );
        assert_eq!(fig.layout.showlegend, Some(false));
    }

    #[test]
    fn test_unknown_country_renders_placeholder() {
        let fig = figure(Harness::selecting("ZZZ").render(ViewId::Scatter));
        assert!(fig.is_placeholder());
    }

    #[test]
    fn test_no_selection_renders_nothing() {
        let artifact = Harness::new(None, Metric::Mpi).render(ViewId::Scatter);
        assert_eq!(artifact, Artifact::Empty);
    }
}
