//! Symbolic icon tags and their inline SVG markup.
//!
//! Catalog data refers to icons by [`Glyph`] only; the SVG strings live here
//! so the data model stays free of markup. Paths follow the 24x24 stroked
//! outline style used across the page.

/// An icon the page knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    BookOpen,
    Gamepad,
    Heart,
    CheckSquare,
    Flame,
    Lock,
    Unlock,
    Star,
    ArrowRight,
}

const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#;
const SVG_CLOSE: &str = "</svg>";

impl Glyph {
    /// Stable short name, used as a CSS modifier (`glyph--book-open`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BookOpen => "book-open",
            Self::Gamepad => "gamepad",
            Self::Heart => "heart",
            Self::CheckSquare => "check-square",
            Self::Flame => "flame",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Star => "star",
            Self::ArrowRight => "arrow-right",
        }
    }

    /// Inner SVG elements for this glyph, without the `<svg>` wrapper.
    #[must_use]
    pub fn body(self) -> &'static str {
        match self {
            Self::BookOpen => {
                r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#
            }
            Self::Gamepad => {
                r#"<line x1="6" x2="10" y1="11" y2="11"/><line x1="8" x2="8" y1="9" y2="13"/><line x1="15" x2="15.01" y1="12" y2="12"/><line x1="18" x2="18.01" y1="10" y2="10"/><path d="M17.32 5H6.68a4 4 0 0 0-3.978 3.59C2.604 9.416 2 14.456 2 16a3 3 0 0 0 3 3c1 0 1.5-.5 2-1l1.414-1.414A2 2 0 0 1 9.828 16h4.344a2 2 0 0 1 1.414.586L17 18c.5.5 1 1 2 1a3 3 0 0 0 3-3c0-1.545-.604-6.584-.685-7.258A4 4 0 0 0 17.32 5z"/>"#
            }
            Self::Heart => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#
            }
            Self::CheckSquare => {
                r#"<polyline points="9 11 12 14 22 4"/><path d="M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11"/>"#
            }
            Self::Flame => {
                r#"<path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z"/>"#
            }
            Self::Lock => {
                r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
            }
            Self::Unlock => {
                r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 9.9-1"/>"#
            }
            Self::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Self::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
        }
    }

    /// Complete `<svg>` element for inline embedding.
    #[must_use]
    pub fn svg(self) -> String {
        format!("{SVG_OPEN}{}{SVG_CLOSE}", self.body())
    }
}

#[cfg(test)]
#[path = "glyph_test.rs"]
mod glyph_test;
