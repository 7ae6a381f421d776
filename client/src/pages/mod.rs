//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns layout and delegates per-item rendering to `components`.

pub mod members;
