//! Root application component and server-rendered HTML document.

use leptos::prelude::*;
use leptos::reactive::owner::Owner;

use crate::pages::members::{COURSE_TITLE, MembersPage};

/// Where the host serves the page stylesheet.
pub const STYLESHEET_HREF: &str = "/assets/members.css";

/// HTML shell wrapping [`App`] into a complete document.
pub fn shell() -> impl IntoView {
    let title = format!("Área de Membros · {COURSE_TITLE}");

    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="stylesheet" href=STYLESHEET_HREF/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! { <MembersPage/> }
}

/// Render the full document to a string.
///
/// Output depends only on the compiled-in catalog, so callers render once
/// and reuse the result.
pub fn render_document() -> String {
    let owner = Owner::new();
    owner.with(|| shell().to_html())
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
