//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure renderers: every input arrives as a prop and nothing
//! reads shared context.

pub mod glyph_icon;
pub mod module_card;
