//! List view row highlighting

use super::{Artifact, RenderContext};
use crate::consts::cli_consts::{HIGHLIGHT_COLOR, HIGHLIGHT_TEXT_COLOR};
use serde::Serialize;

/// Conditional style for one table row, in the data-table `style_data_conditional` shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowStyle {
    #[serde(rename = "if")]
    pub condition: RowCondition,
    pub background_color: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowCondition {
    pub row_index: usize,
}

impl RowStyle {
    pub fn highlight(row_index: usize) -> Self {
        Self {
            condition: RowCondition { row_index },
            background_color: HIGHLIGHT_COLOR.to_string(),
            color: HIGHLIGHT_TEXT_COLOR.to_string(),
        }
    }
}

/// Highlights the selected country's row; no match leaves every row unstyled.
pub fn render(ctx: &RenderContext<'_>) -> Artifact {
    let styles = ctx
        .state
        .selection()
        .and_then(|iso| ctx.dataset.row_index(iso))
        .map(RowStyle::highlight)
        .into_iter()
        .collect();
    Artifact::RowStyles { styles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ViewId;
    use crate::render::testing::Harness;
    use serde_json::json;

    #[test]
    fn test_highlights_row_position_of_selection() {
        let artifact = Harness::selecting("KEN").render(ViewId::Table);
        assert_eq!(
            artifact,
            Artifact::RowStyles {
                styles: vec![RowStyle::highlight(2)]
            }
        );
    }

    #[test]
    fn test_row_style_wire_shape() {
        assert_eq!(
            serde_json::to_value(RowStyle::highlight(1)).unwrap(),
            json!({"if": {"row_index": 1}, "backgroundColor": "#3D9970", "color": "white"})
        );
    }

    #[test]
    fn test_unknown_country_styles_nothing() {
        let artifact = Harness::selecting("ZZZ").render(ViewId::Table);
        assert_eq!(artifact, Artifact::RowStyles { styles: vec![] });
    }
}
