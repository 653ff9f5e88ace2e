//! View renderers
//!
//! Every view is a pure function of the dataset and the current [`ViewState`]. Renderers
//! never fail: a selection with no matching row produces an empty or placeholder artifact.

pub mod assets;
mod breakdown;
pub mod chart;
mod choropleth;
mod panels;
mod scatter;
mod table;

pub use assets::{AssetStore, Image, ImageSource};
pub use chart::Figure;
pub use table::RowStyle;

use crate::dataset::Dataset;
use crate::state::ViewState;
use serde::Serialize;

/// UI nodes that receive rendered artifacts. Serialized names are the page's element ids.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter,
)]
pub enum ViewId {
    Choropleth,
    Scatter,
    #[serde(rename = "table")]
    #[strum(serialize = "table")]
    Table,
    SubplotHeader,
    #[serde(rename = "URL")]
    #[strum(serialize = "URL")]
    Link,
    Image,
    Wordcloud,
    GenderBreakdown,
    SectorBreakdown,
}

/// What a renderer hands back to the front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artifact {
    Figure(Figure),
    RowStyles { styles: Vec<RowStyle> },
    Text { text: String },
    Link { text: String, href: String },
    Image(Image),
    /// Nothing to show, e.g. before any country is selected.
    Empty,
}

impl Artifact {
    /// True when the view had to fall back to a placeholder for the current selection.
    pub fn is_degraded(&self) -> bool {
        match self {
            Artifact::Figure(fig) => fig.is_placeholder(),
            Artifact::Image(image) => image.source == ImageSource::Placeholder,
            _ => false,
        }
    }
}

/// Everything a renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub dataset: &'a Dataset,
    pub assets: &'a AssetStore,
    pub state: &'a ViewState,
    /// Outbound link pattern; `{code}` is replaced by the two-letter prefix.
    pub link_template: &'a str,
}

pub type Renderer = fn(&RenderContext<'_>) -> Artifact;

/// The renderer that produces `view`.
pub fn renderer_for(view: ViewId) -> Renderer {
    match view {
        ViewId::Choropleth => choropleth::render,
        ViewId::Scatter => scatter::render,
        ViewId::Table => table::render,
        ViewId::SubplotHeader => panels::render_header,
        ViewId::Link => panels::render_link,
        ViewId::Image => assets::render_photo,
        ViewId::Wordcloud => assets::render_wordcloud,
        ViewId::GenderBreakdown => breakdown::render_gender,
        ViewId::SectorBreakdown => breakdown::render_sector,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Context builder for renderer tests.

    use super::*;
    use crate::consts::cli_consts::DEFAULT_LINK_TEMPLATE;
    use crate::dataset::fixtures;
    use crate::state::Metric;

    pub struct Harness {
        pub dataset: Dataset,
        pub assets: AssetStore,
        pub state: ViewState,
    }

    impl Harness {
        pub fn new(selection: Option<&str>, metric: Metric) -> Self {
            Self {
                dataset: fixtures::sample(),
                assets: AssetStore::new("/nonexistent-assets"),
                state: ViewState::new(selection.map(fixtures::iso), metric),
            }
        }

        pub fn selecting(iso: &str) -> Self {
            Self::new(Some(iso), Metric::Mpi)
        }

        pub fn ctx(&self) -> RenderContext<'_> {
            RenderContext {
                dataset: &self.dataset,
                assets: &self.assets,
                state: &self.state,
                link_template: DEFAULT_LINK_TEMPLATE,
            }
        }

        pub fn render(&self, view: ViewId) -> Artifact {
            renderer_for(view)(&self.ctx())
        }
    }

    pub fn figure(artifact: Artifact) -> Figure {
        match artifact {
            Artifact::Figure(fig) => fig,
            other => panic!("expected a figure, got {other:?}"),
        }
    }
}
