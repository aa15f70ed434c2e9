use crate::domain::entities::Service;

/// Case-insensitive substring search over listing names.
pub struct ListingFilter;

impl ListingFilter {
    /// Returns the listings whose name contains `query`, ignoring case.
    ///
    /// Produces a fresh vector on every call and preserves input order. An
    /// empty query returns every item.
    #[must_use]
    pub fn filter(items: &[Service], query: &str) -> Vec<Service> {
        let needle = query.to_lowercase();
        items
            .iter()
            .filter(|service| service.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
