//! Header and outbound link for the explore section

use super::{Artifact, RenderContext};
use crate::dataset::Iso;

/// Substitutes the two-letter prefix of `iso` into `template`.
pub fn borrower_url(template: &str, iso: &Iso) -> String {
    template.replace("{code}", iso.prefix())
}

pub fn render_header(ctx: &RenderContext<'_>) -> Artifact {
    ctx.state
        .selection()
        .and_then(|iso| ctx.dataset.country_name(iso))
        .map(|name| Artifact::Text {
            text: name.to_string(),
        })
        .unwrap_or(Artifact::Empty)
}

/// The href needs only the code, so unknown countries still get a working link.
pub fn render_link(ctx: &RenderContext<'_>) -> Artifact {
    let Some(iso) = ctx.state.selection() else {
        return Artifact::Empty;
    };
    let name = ctx.dataset.country_name(iso).unwrap_or(iso.as_str());
    Artifact::Link {
        text: format!("Find your perfect borrower in {} now.", name),
        href: borrower_url(ctx.link_template, iso),
    }
}
