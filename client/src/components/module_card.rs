//! Card for a single catalog module.
//!
//! DESIGN
//! ======
//! Everything visible on a card is derived from the module record and its
//! list position. The derivations live in small pure functions below so the
//! component body only wires them into markup.

use leptos::prelude::*;

use crate::catalog::{CallToAction, Module};
use crate::components::glyph_icon::GlyphIcon;
use crate::util::glyph::Glyph;

/// Delay added per list position to the entrance animation.
pub const ENTRANCE_STAGGER_MS: usize = 100;
/// Entrance animation length for one card.
pub const ENTRANCE_DURATION_MS: usize = 400;

/// Corner badge shown on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Premium,
    Bonus,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Self::Premium => "Premium",
            Self::Bonus => "Bônus",
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            Self::Premium => Glyph::Lock,
            Self::Bonus => Glyph::Star,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Premium => "module-card__badge module-card__badge--premium",
            Self::Bonus => "module-card__badge module-card__badge--bonus",
        }
    }
}

/// Access line printed next to the call-to-action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessStatus {
    Unlocked,
    Locked,
}

impl AccessStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unlocked => "Acesso Liberado",
            Self::Locked => "Conteúdo Bloqueado",
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            Self::Unlocked => Glyph::Unlock,
            Self::Locked => Glyph::Lock,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Unlocked => "module-card__status module-card__status--unlocked",
            Self::Locked => "module-card__status module-card__status--locked",
        }
    }
}

/// Locked wins over bonus; at most one badge is ever shown.
pub fn badge_for(module: &Module) -> Option<Badge> {
    if module.is_locked {
        Some(Badge::Premium)
    } else if module.is_bonus {
        Some(Badge::Bonus)
    } else {
        None
    }
}

pub fn access_status(module: &Module) -> AccessStatus {
    if module.is_locked { AccessStatus::Locked } else { AccessStatus::Unlocked }
}

/// Trailing glyph on the call-to-action label.
pub fn cta_glyph(module: &Module) -> Glyph {
    if module.is_locked { Glyph::Flame } else { Glyph::ArrowRight }
}

pub fn entrance_delay_ms(index: usize) -> usize {
    index.saturating_mul(ENTRANCE_STAGGER_MS)
}

/// Inline style driving the staggered slide-in.
pub fn entrance_style(index: usize) -> String {
    format!(
        "animation-duration: {ENTRANCE_DURATION_MS}ms; animation-delay: {}ms",
        entrance_delay_ms(index)
    )
}

pub fn card_class(locked: bool) -> &'static str {
    if locked { "module-card module-card--locked" } else { "module-card" }
}

pub fn cover_class(locked: bool) -> &'static str {
    if locked {
        "module-card__image module-card__image--locked"
    } else {
        "module-card__image"
    }
}

pub fn icon_class(locked: bool) -> &'static str {
    if locked {
        "module-card__icon module-card__icon--locked"
    } else {
        "module-card__icon"
    }
}

pub fn button_class(locked: bool) -> &'static str {
    if locked {
        "module-card__cta module-card__cta--locked"
    } else {
        "module-card__cta"
    }
}

/// One course module rendered as a card.
#[component]
pub fn ModuleCard(module: &'static Module, index: usize) -> impl IntoView {
    let locked = module.is_locked;
    let status = access_status(module);

    let cover = module.image.map(|src| {
        view! {
            <div class="module-card__cover">
                <img class=cover_class(locked) src=src alt=module.title referrerpolicy="no-referrer"/>
                {locked
                    .then(|| {
                        view! {
                            <div class="module-card__lock-overlay">
                                <span class="module-card__lock-ring">
                                    <GlyphIcon glyph=Glyph::Lock modifier="glyph--xl"/>
                                </span>
                            </div>
                        }
                    })}
            </div>
        }
    });

    let badge = badge_for(module).map(|badge| {
        view! {
            <span class=badge.class()>
                <GlyphIcon glyph=badge.glyph() modifier="glyph--sm"/>
                {badge.label()}
            </span>
        }
    });

    let action = match module.call_to_action() {
        CallToAction::NavigateTo(href) => view! {
            <a class=button_class(false) href=href target="_blank" rel="noopener noreferrer">
                {module.button_text}
                <GlyphIcon glyph=Glyph::ArrowRight modifier="glyph--sm"/>
            </a>
        }
        .into_any(),
        CallToAction::Disabled => view! {
            <button type="button" class=button_class(locked)>
                {module.button_text}
                <GlyphIcon glyph=cta_glyph(module) modifier="glyph--sm"/>
            </button>
        }
        .into_any(),
    };

    view! {
        <article class=card_class(locked) style=entrance_style(index) data-module-id=module.id.to_string()>
            {cover}
            {badge}
            <div class="module-card__body">
                <div class="module-card__heading">
                    <div class=icon_class(locked)>
                        <GlyphIcon glyph=module.icon/>
                    </div>
                    <div class="module-card__text">
                        <h4 class="module-card__title">{module.title}</h4>
                        <p class="module-card__subtitle">{module.subtitle}</p>
                    </div>
                </div>
                <div class="module-card__footer">
                    <span class=status.class()>
                        <GlyphIcon glyph=status.glyph() modifier="glyph--sm"/>
                        {status.label()}
                    </span>
                    {action}
                </div>
            </div>
            <div class="module-card__glow" aria-hidden="true"></div>
        </article>
    }
}

#[cfg(test)]
#[path = "module_card_test.rs"]
mod module_card_test;
