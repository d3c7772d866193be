//! Set of favorite university slugs.
//!
//! Backed by a `Vec` so stored order follows insertion order. Lists are tens
//! of entries, so linear membership checks are fine.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Unique, insertion-ordered collection of slugs.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Favorites {
    slugs: Vec<String>,
}

impl Favorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s == slug)
    }

    /// Add `slug` if absent. Returns `true` when it was added.
    pub fn insert(&mut self, slug: impl Into<String>) -> bool {
        let slug = slug.into();
        if self.contains(&slug) {
            return false;
        }
        self.slugs.push(slug);
        true
    }

    /// Remove `slug` if present. Returns `true` when it was removed.
    pub fn remove(&mut self, slug: &str) -> bool {
        let before = self.slugs.len();
        self.slugs.retain(|s| s != slug);
        self.slugs.len() != before
    }

    /// Flip membership of `slug`. Returns the new membership.
    pub fn toggle(&mut self, slug: &str) -> bool {
        if self.remove(slug) {
            false
        } else {
            self.slugs.push(slug.to_owned());
            true
        }
    }

    /// Number of distinct slugs.
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// `true` when no slug is saved.
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Slugs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }

    /// Owned copy of the slugs in insertion order, as stored.
    pub fn to_vec(&self) -> Vec<String> {
        self.slugs.clone()
    }
}

/// Membership equality; order is not significant.
impl PartialEq for Favorites {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|slug| other.contains(slug))
    }
}

impl Eq for Favorites {}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut favorites = Self::new();
        for slug in iter {
            favorites.insert(slug);
        }
        favorites
    }
}

impl<'de> Deserialize<'de> for Favorites {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let slugs = Vec::<String>::deserialize(deserializer)?;
        Ok(slugs.into_iter().collect())
    }
}
