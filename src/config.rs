//! Storage keys and endpoint paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! The templates and the `/universities` route are owned by the server, so
//! these values have to match what the server serves. They live in one place
//! so tests can point the controller at isolated keys.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the JSON array of favorite slugs.
pub const FAVORITES_KEY: &str = "myuni:favorites";

/// `localStorage` key holding the raw selected city.
pub const CITY_KEY: &str = "myuni:city";

/// Endpoint receiving the save-list submission.
pub const SAVE_ENDPOINT: &str = "/api/save";

/// Listing page filtered by the `city` query parameter.
pub const LISTING_PATH: &str = "/universities";

/// Runtime configuration for the preference store and controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub favorites_key: String,
    pub city_key: String,
    pub save_endpoint: String,
    pub listing_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            favorites_key: FAVORITES_KEY.to_owned(),
            city_key: CITY_KEY.to_owned(),
            save_endpoint: SAVE_ENDPOINT.to_owned(),
            listing_path: LISTING_PATH.to_owned(),
        }
    }
}
