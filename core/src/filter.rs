//! Pure client-side listing filtering.
//!
//! Filtering never re-fetches: it is a lazy view over the in-memory listing
//! set, recomputed whenever an input changes.

use crate::listing::Listing;
use std::collections::HashSet;

/// Search inputs for the listing directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    /// Free-text search term, matched against name, city, and country.
    pub term: String,
    /// Exact city filter, when set.
    pub city: Option<String>,
    /// Minimum star rating, when set.
    pub min_rating: Option<u8>,
}

impl ListingQuery {
    /// Query matching every displayable listing.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether a listing passes this query.
    ///
    /// The term matches case-insensitively against name OR city OR country;
    /// that is ANDed with the exact city filter and the minimum star rating.
    /// Listings missing display fields never match.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        if !listing.is_displayable() {
            return false;
        }

        let term = self.term.to_lowercase();
        let matches_term = listing.hotel_name.to_lowercase().contains(&term)
            || listing.city.to_lowercase().contains(&term)
            || listing.country.to_lowercase().contains(&term);

        let matches_city = self.city.as_deref().is_none_or(|city| listing.city == city);
        let matches_rating = self
            .min_rating
            .is_none_or(|min| listing.star_rating >= min);

        matches_term && matches_city && matches_rating
    }

    /// Lazy filtered view over a listing slice.
    pub fn filter<'a>(&'a self, listings: &'a [Listing]) -> impl Iterator<Item = &'a Listing> {
        listings.iter().filter(move |listing| self.matches(listing))
    }
}

/// Cities present in the listing set, deduplicated in first-seen order.
/// Feeds the city filter dropdown.
#[must_use]
pub fn cities(listings: &[Listing]) -> Vec<String> {
    let mut seen = HashSet::new();
    listings
        .iter()
        .filter(|listing| !listing.city.is_empty())
        .filter(|listing| seen.insert(listing.city.clone()))
        .map(|listing| listing.city.clone())
        .collect()
}
