//! Inline SVG icon component.

use leptos::prelude::*;

use crate::util::glyph::Glyph;

/// Renders a [`Glyph`] as inline SVG wrapped in a sizing span.
#[component]
pub fn GlyphIcon(glyph: Glyph, #[prop(optional)] modifier: &'static str) -> impl IntoView {
    let classes = if modifier.is_empty() {
        format!("glyph glyph--{}", glyph.name())
    } else {
        format!("glyph glyph--{} {modifier}", glyph.name())
    };

    view! { <span class=classes inner_html=glyph.svg()></span> }
}
