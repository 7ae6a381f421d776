//! Compiled-in course catalog.
//!
//! DESIGN
//! ======
//! The catalog is a `'static` slice built at compile time. Display order is
//! slice order. Nothing mutates it after startup, so renderers borrow entries
//! directly instead of cloning them.

use std::collections::HashSet;

use crate::util::glyph::Glyph;

/// Error returned by [`validate`] when a catalog breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Ids start at 1; zero is reserved as "unset".
    #[error("module at position {position} has id 0")]
    ZeroId { position: usize },
    /// Two entries share the same id.
    #[error("duplicate module id {0}")]
    DuplicateId(u32),
    /// A locked module must never carry a navigable link.
    #[error("locked module {0} has a link")]
    LockedWithLink(u32),
}

/// One unit of course content or bonus material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Module {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
    pub link: Option<&'static str>,
    pub is_locked: bool,
    pub is_bonus: bool,
    pub icon: Glyph,
    /// Marks upsell content. Carried as data only.
    pub is_upsell: bool,
    pub image: Option<&'static str>,
}

/// What the card's action element does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallToAction {
    /// Open the URL in a new browsing context.
    NavigateTo(&'static str),
    /// Inert button; clicking it goes nowhere.
    Disabled,
}

impl Module {
    /// Derive the call-to-action. Locked modules never navigate, even when a
    /// link is set.
    #[must_use]
    pub fn call_to_action(&self) -> CallToAction {
        match (self.is_locked, self.link) {
            (false, Some(url)) => CallToAction::NavigateTo(url),
            _ => CallToAction::Disabled,
        }
    }
}

static MODULES: [Module; 5] = [
    Module {
        id: 1,
        title: "Livro Digital: 52 Semanas com Jesus",
        subtitle: "O guia completo para sua jornada espiritual",
        button_text: "Acessar Material",
        link: Some("https://drive.google.com/drive/folders/15eZkzgpehtvv4hzaJqJjkONVey_BCtf9"),
        is_locked: false,
        is_bonus: false,
        icon: Glyph::BookOpen,
        is_upsell: false,
        image: Some("https://res.cloudinary.com/drth8olcl/image/upload/v1772044324/Capa_52_semanas_com_cristo_nyltxh.jpg"),
    },
    Module {
        id: 2,
        title: "BÔNUS: Uno Bíblico",
        subtitle: "Diversão e aprendizado em família",
        button_text: "Acessar Bônus",
        link: Some("https://drive.google.com/drive/folders/1vnqkmuU_snMcOtuH4IrNmhBx2BEr5Vus"),
        is_locked: false,
        is_bonus: true,
        icon: Glyph::Gamepad,
        is_upsell: false,
        image: Some("https://res.cloudinary.com/drth8olcl/image/upload/v1772044324/Capa_uno_biblico_a4qdpf.jpg"),
    },
    Module {
        id: 3,
        title: "BÔNUS: Potinho da Oração",
        subtitle: "Cultivando o hábito de falar com Deus",
        button_text: "Acessar Bônus",
        link: Some("https://drive.google.com/drive/folders/1ZoIYhngu144sr_rLDfH_sr_UW7EEjRHg"),
        is_locked: false,
        is_bonus: true,
        icon: Glyph::Heart,
        is_upsell: false,
        image: Some("https://res.cloudinary.com/drth8olcl/image/upload/v1772044324/Capa_potinho_da_ora%C3%A7%C3%A3o_ccohiq.jpg"),
    },
    Module {
        id: 4,
        title: "BÔNUS: Checklist Minha Semana com Jesus",
        subtitle: "Organização e compromisso diário",
        button_text: "Acessar Bônus",
        link: Some("https://drive.google.com/drive/folders/1L-AaSXzxaTcoqDRZSid2nbZ7Z5D8Is-S"),
        is_locked: false,
        is_bonus: true,
        icon: Glyph::CheckSquare,
        is_upsell: false,
        image: Some("https://res.cloudinary.com/drth8olcl/image/upload/v1772044324/Capa_checklist_minha_semana_com_Jesus_t7qzcp.jpg"),
    },
    Module {
        id: 5,
        title: "Meu Pequeno Pregador",
        subtitle: "Capacitando crianças para compartilhar a Palavra",
        button_text: "Desbloquear Agora",
        link: None,
        is_locked: true,
        is_bonus: false,
        icon: Glyph::Flame,
        is_upsell: true,
        image: Some("https://res.cloudinary.com/drth8olcl/image/upload/v1772044324/Capa_meu_pequeno_pregador_jcxw4h.jpg"),
    },
];

/// The course catalog in display order.
#[must_use]
pub fn catalog() -> &'static [Module] {
    &MODULES
}

/// Check catalog invariants: positive ids, unique ids, and no links on
/// locked modules.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found, scanning in display order.
pub fn validate(modules: &[Module]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(modules.len());
    for (position, module) in modules.iter().enumerate() {
        if module.id == 0 {
            return Err(CatalogError::ZeroId { position });
        }
        if !seen.insert(module.id) {
            return Err(CatalogError::DuplicateId(module.id));
        }
        if module.is_locked && module.link.is_some() {
            return Err(CatalogError::LockedWithLink(module.id));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;
