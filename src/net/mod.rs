//! Network layer for the save-list submission.
//!
//! DESIGN
//! ======
//! `api` owns the payload and the [`api::Transport`] seam; `gloo` is the
//! browser transport and only exists in hydrate builds.

pub mod api;
#[cfg(feature = "hydrate")]
pub mod gloo;
