//! DOM seam between the controller and the server-rendered templates.
//!
//! SYSTEM CONTEXT
//! ==============
//! The templates own the markup; this module only names the hooks they
//! expose (ids, data attributes, classes) and how a favorite button looks in
//! each state. `dom::BrowserPage` applies that to the live document.


#[cfg(feature = "hydrate")]
pub mod dom;

/// Element id of the selected-city badge.
pub const CITY_BADGE_ID: &str = "selectedCity";
/// Element id of the city dropdown trigger button.
pub const CITY_DROPDOWN_ID: &str = "cityDropdownBtn";
/// Attribute marking a favorite button.
pub const FAV_BUTTON_ATTR: &str = "data-fav-btn";
/// Attribute carrying the button's university slug.
pub const FAV_SLUG_ATTR: &str = "data-slug";
/// Attribute marking a favorite-count badge.
pub const FAV_COUNT_ATTR: &str = "data-fav-count";
/// Badge text when no city is selected.
pub const NO_CITY_PLACEHOLDER: &str = "None";
/// Alert shown when browsing without a city.
pub const MISSING_CITY_MESSAGE: &str = "Please select a city first!";

const ACTIVE_CLASS: &str = "btn-danger";
const INACTIVE_CLASS: &str = "btn-outline-danger";

/// Rendered state of one favorite button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub active: bool,
}

impl ButtonView {
    pub fn for_membership(active: bool) -> Self {
        Self { active }
    }

    pub fn label(self) -> &'static str {
        if self.active { "♥ Saved" } else { "♡ Save" }
    }

    /// Class that must be present.
    pub fn class_on(self) -> &'static str {
        if self.active { ACTIVE_CLASS } else { INACTIVE_CLASS }
    }

    /// Class that must be absent.
    pub fn class_off(self) -> &'static str {
        if self.active { INACTIVE_CLASS } else { ACTIVE_CLASS }
    }
}

/// Operations the controller performs on the page.
pub trait Page {
    /// Set the text of the element with `id`. Missing elements are skipped.
    fn set_text_by_id(&self, id: &str, text: &str);

    /// Write `count` into every favorite-count badge.
    fn set_favorite_counts(&self, count: usize);

    /// Visit every favorite button with its slug (if it has one) and apply the
    /// returned view.
    fn for_each_favorite_button(&self, view: &mut dyn FnMut(Option<&str>) -> ButtonView);

    /// Blocking user notification.
    fn alert(&self, message: &str);

    /// Replace the current location with `url`.
    fn navigate(&self, url: &str);
}
