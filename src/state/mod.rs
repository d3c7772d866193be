//! Persisted client-side preference state.
//!
//! DESIGN
//! ======
//! `favorites` is the in-memory set type; `prefs` maps it (and the selected
//! city) onto a key-value store so the controller never touches storage
//! directly.

pub mod favorites;
pub mod prefs;
