//! Utility helpers shared by the controller and the browser bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from controller logic
//! to keep the controller testable without a DOM.

#[cfg(feature = "hydrate")]
pub mod local_storage;
pub mod reveal;
pub mod url;
