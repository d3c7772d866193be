//! # myuni-client
//!
//! Browser-side preference state for the university directory site.
//!
//! The server renders listing pages; this crate runs in the page (as WASM,
//! under the `hydrate` feature) and owns the small amount of state the user
//! keeps between visits: a set of favorite university slugs and a selected
//! city. It keeps the favorite buttons and badges in the rendered templates in
//! step with that state and submits the saved list to `/api/save`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::MyUni`], the single interface object |
//! | [`state`] | Favorites set and the persisted preference store |
//! | [`net`] | Save request payload and the HTTP transport seam |
//! | [`page`] | DOM seam the controller renders through |
//! | [`util`] | URL building, scroll reveal, `localStorage` adapter |
//! | [`config`] | Storage keys and endpoint paths |
//!
//! Without `hydrate` every browser adapter is compiled out and the controller
//! runs against in-memory implementations.

pub mod config;
pub mod controller;
pub mod net;
pub mod page;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod bindings;
