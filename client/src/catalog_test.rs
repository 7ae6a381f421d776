use super::*;

fn module(id: u32) -> Module {
    Module {
        id,
        title: "Title",
        subtitle: "Subtitle",
        button_text: "Open",
        link: Some("https://x"),
        is_locked: false,
        is_bonus: false,
        icon: Glyph::BookOpen,
        is_upsell: false,
        image: None,
    }
}

// =============================================================
// Compiled-in catalog
// =============================================================

#[test]
fn catalog_is_valid() {
    assert_eq!(validate(catalog()), Ok(()));
}

#[test]
fn catalog_has_five_modules_in_id_order() {
    let ids = catalog().iter().map(|m| m.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn catalog_bonus_entries_are_unlocked_and_linked() {
    for m in catalog().iter().filter(|m| m.is_bonus) {
        assert!(!m.is_locked, "module {} is bonus and locked", m.id);
        assert!(m.link.is_some(), "module {} is bonus without link", m.id);
    }
    assert_eq!(catalog().iter().filter(|m| m.is_bonus).count(), 3);
}

#[test]
fn catalog_last_entry_is_locked_upsell() {
    let last = catalog().last().unwrap();
    assert_eq!(last.title, "Meu Pequeno Pregador");
    assert!(last.is_locked);
    assert!(last.is_upsell);
    assert!(last.link.is_none());
    assert_eq!(last.icon, Glyph::Flame);
}

// =============================================================
// CallToAction
// =============================================================

#[test]
fn call_to_action_navigates_when_unlocked_with_link() {
    assert_eq!(module(1).call_to_action(), CallToAction::NavigateTo("https://x"));
}

#[test]
fn call_to_action_disabled_without_link() {
    let m = Module { link: None, ..module(1) };
    assert_eq!(m.call_to_action(), CallToAction::Disabled);
}

#[test]
fn call_to_action_disabled_when_locked_even_with_link() {
    let m = Module { is_locked: true, ..module(1) };
    assert_eq!(m.call_to_action(), CallToAction::Disabled);
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_empty_catalog() {
    assert_eq!(validate(&[]), Ok(()));
}

#[test]
fn validate_rejects_zero_id() {
    let modules = [module(1), module(0)];
    assert_eq!(validate(&modules), Err(CatalogError::ZeroId { position: 1 }));
}

#[test]
fn validate_rejects_duplicate_id() {
    let modules = [module(1), module(2), module(1)];
    assert_eq!(validate(&modules), Err(CatalogError::DuplicateId(1)));
}

#[test]
fn validate_rejects_locked_module_with_link() {
    let locked = Module { is_locked: true, ..module(7) };
    let err = validate(&[locked]).unwrap_err();
    assert_eq!(err, CatalogError::LockedWithLink(7));
    assert_eq!(err.to_string(), "locked module 7 has a link");
}
