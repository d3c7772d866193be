//! The favorites/city controller exposed to the site's templates.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`MyUni`] is built per page load and handed to the JS bindings. It
//! owns three seams: a [`PreferenceStore`] for state, a [`Page`] for
//! rendering, and a [`Transport`] for the save submission. Every render
//! re-reads storage, so what is displayed always matches what is stored.
//!
//! ERROR HANDLING
//! ==============
//! Unreadable favorites render as an empty set and failed storage writes are
//! logged; neither reaches the caller. Save failures are returned as
//! [`SaveError`] without retry.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::Config;
use crate::net::api::{SaveError, SaveRequest, Transport, parse_save_reply};
use crate::page::{
    ButtonView, CITY_BADGE_ID, CITY_DROPDOWN_ID, MISSING_CITY_MESSAGE, NO_CITY_PLACEHOLDER, Page,
};
use crate::state::favorites::Favorites;
use crate::state::prefs::PreferenceStore;
use crate::util::url::listing_url;

/// Result of [`MyUni::browse_universities`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// The page was sent to this URL.
    Navigated(String),
    /// No city was selected; the user was alerted and the page stayed put.
    MissingCity,
}

/// Favorites/city UI controller.
pub struct MyUni<P, G, T> {
    prefs: P,
    page: G,
    transport: T,
    config: Config,
}

impl<P, G, T> MyUni<P, G, T>
where
    P: PreferenceStore,
    G: Page,
    T: Transport,
{
    pub fn new(prefs: P, page: G, transport: T, config: Config) -> Self {
        Self {
            prefs,
            page,
            transport,
            config,
        }
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn page(&self) -> &G {
        &self.page
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // --- Favorites ---

    /// Stored favorites; unreadable data counts as none.
    pub fn get_favorites(&self) -> Favorites {
        match self.prefs.favorites() {
            Ok(favorites) => favorites,
            Err(err) => {
                log::warn!("ignoring stored favorites: {err}");
                Favorites::new()
            }
        }
    }

    /// Persist `favorites` and refresh the count badges.
    pub fn set_favorites(&self, favorites: &Favorites) {
        if let Err(err) = self.prefs.set_favorites(favorites) {
            log::warn!("favorites not saved: {err}");
        }
        self.render_favorite_badges();
    }

    /// Flip `slug` in the favorites set, persist, and re-render every
    /// favorite button. Returns the slug's new membership.
    pub fn toggle_favorite(&self, slug: &str) -> bool {
        let mut favorites = self.get_favorites();
        let saved = favorites.toggle(slug);
        self.set_favorites(&favorites);
        self.update_card_buttons();
        saved
    }

    // --- City ---

    pub fn get_city(&self) -> String {
        self.prefs.city()
    }

    /// Persist `city` (empty clears it) and render the stored city into the
    /// badge and dropdown. A rejected write leaves the previous city showing.
    pub fn set_city(&self, city: &str) {
        if let Err(err) = self.prefs.set_city(city) {
            log::warn!("city not saved: {err}");
        }
        let stored = self.prefs.city();
        let badge = if stored.is_empty() { NO_CITY_PLACEHOLDER } else { &stored };
        self.page.set_text_by_id(CITY_BADGE_ID, badge);
        if !stored.is_empty() {
            self.page.set_text_by_id(CITY_DROPDOWN_ID, &stored);
        }
    }

    pub fn change_city(&self, city: &str) {
        self.set_city(city);
    }

    /// Navigate to the listing page for the stored city, or alert if none.
    pub fn browse_universities(&self) -> BrowseOutcome {
        let city = self.get_city();
        if city.is_empty() {
            self.page.alert(MISSING_CITY_MESSAGE);
            return BrowseOutcome::MissingCity;
        }
        let url = listing_url(&self.config.listing_path, &city);
        log::debug!("browsing {url}");
        self.page.navigate(&url);
        BrowseOutcome::Navigated(url)
    }

    // --- Save ---

    /// Submit contact details plus the stored city and favorites.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Rejected`] for any non-2xx reply, and transport or
    /// decode errors as they occur. Exactly one request is sent.
    pub async fn save_list(
        &self,
        name: &str,
        email: &str,
        note: &str,
    ) -> Result<serde_json::Value, SaveError> {
        let request = SaveRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            note: note.to_owned(),
            city: self.get_city(),
            favorites: self.get_favorites(),
        };
        let reply = self
            .transport
            .post_json(&self.config.save_endpoint, &request)
            .await?;
        parse_save_reply(&reply).inspect_err(|err| log::warn!("save failed: {err}"))
    }

    // --- Rendering ---

    /// Write the stored favorite count into every count badge.
    pub fn render_favorite_badges(&self) {
        self.page.set_favorite_counts(self.get_favorites().len());
    }

    /// Re-render every favorite button against the stored set.
    pub fn update_card_buttons(&self) {
        let favorites = self.get_favorites();
        self.page.for_each_favorite_button(&mut |slug| {
            ButtonView::for_membership(slug.is_some_and(|s| favorites.contains(s)))
        });
    }

    /// Bring a freshly loaded page in line with stored state.
    pub fn sync_page(&self) {
        let city = self.get_city();
        if !city.is_empty() {
            self.set_city(&city);
        }
        self.render_favorite_badges();
        self.update_card_buttons();
    }
}
