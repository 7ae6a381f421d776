//! Members area landing page.
//!
//! Header, welcome banner, the course module list, and footer. Reads the
//! compiled-in catalog once and hands each entry to [`ModuleCard`].

use leptos::prelude::*;

use crate::catalog::catalog;
use crate::components::module_card::ModuleCard;

pub const COURSE_TITLE: &str = "52 Semanas com Jesus";
pub const FOOTER_NOTICE: &str = "© 2026 52 Semanas com Jesus • Todos os direitos reservados";

/// Section header count, e.g. `"5 Módulos"`.
pub fn module_count_label(count: usize) -> String {
    format!("{count} Módulos")
}

#[component]
pub fn MembersPage() -> impl IntoView {
    let modules = catalog();
    let count = module_count_label(modules.len());

    view! {
        <div class="members">
            <header class="members__header">
                <div class="members__header-inner">
                    <h1 class="members__eyebrow">"Área de Membros"</h1>
                    <span class="members__course">{COURSE_TITLE}</span>
                </div>
            </header>

            <main class="members__main">
                <section class="welcome">
                    <h2 class="welcome__title">"Bem-vindo à sua jornada!"</h2>
                    <p class="welcome__subtitle">"Que alegria ter você aqui conosco."</p>
                </section>

                <section class="course">
                    <div class="course__header">
                        <h3 class="course__heading">"Conteúdo do Curso"</h3>
                        <span class="course__count">{count}</span>
                    </div>
                    <div class="course__cards">
                        {modules
                            .iter()
                            .enumerate()
                            .map(|(index, module)| view! { <ModuleCard module=module index=index/> })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <footer class="members__footer">
                    <div class="members__dots" aria-hidden="true">
                        <span class="members__dot"></span>
                        <span class="members__dot"></span>
                        <span class="members__dot"></span>
                    </div>
                    <p class="members__notice">{FOOTER_NOTICE}</p>
                </footer>
            </main>
        </div>
    }
}

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;
