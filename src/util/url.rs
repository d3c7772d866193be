//! Listing-page URL construction.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// Listing URL for `city`, e.g. `/universities?city=Abu%20Dhabi`.
pub fn listing_url(listing_path: &str, city: &str) -> String {
    format!("{listing_path}?city={}", urlencoding::encode(city))
}
