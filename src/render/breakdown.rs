//! Gender and sector bar charts for the selected country

use super::chart::{BarTrace, Figure, FigureLayout, Marker, Trace};
use super::{Artifact, RenderContext};
use crate::consts::cli_consts::SECTOR_BAR_COLOR;
use crate::dataset::Iso;

const GENDER_TITLE: &str = "Gender Breakdown";
const SECTOR_TITLE: &str = "Sector Breakdown";

fn bar_chart(title: &str, x: Vec<String>, y: Vec<f64>, marker: Option<Marker>) -> Artifact {
    Artifact::Figure(Figure::new(
        vec![Trace::Bar(BarTrace { x, y, marker })],
        FigureLayout {
            title: Some(title.to_string()),
            ..FigureLayout::default()
        },
    ))
}

fn no_data(title: &str, iso: &Iso) -> Artifact {
    Artifact::Figure(Figure::placeholder(title, format!("No data for {}", iso)))
}

pub fn render_gender(ctx: &RenderContext<'_>) -> Artifact {
    let Some(iso) = ctx.state.selection() else {
        return Artifact::Empty;
    };
    match ctx.dataset.gender(iso) {
        Some(row) => {
            let (x, y) = row
                .categories()
                .into_iter()
                .map(|(name, count)| (name.to_string(), count))
                .unzip();
            bar_chart(GENDER_TITLE, x, y, None)
        }
        None => no_data(GENDER_TITLE, iso),
    }
}

pub fn render_sector(ctx: &RenderContext<'_>) -> Artifact {
    let Some(iso) = ctx.state.selection() else {
        return Artifact::Empty;
    };
    match ctx.dataset.sector(iso) {
        Some(row) => {
            let (x, y) = row.sectors.iter().cloned().unzip();
            bar_chart(SECTOR_TITLE, x, y, Some(Marker::color(SECTOR_BAR_COLOR)))
        }
        None => no_data(SECTOR_TITLE, iso),
    }
}
