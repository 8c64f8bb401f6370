use crate::traits::{CategoryApi, Notifier};
use crate::types::Category;

/// Alert message shown when the category list cannot be loaded
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load the category list";

/// Listing view state for the categories screen
///
/// Owns the displayed collection exclusively. After activation the view is
/// either loaded (collection replaced wholesale with the fetched sequence)
/// or errored (collection untouched, user notified once).
pub struct CategoryList<N> {
    categories: Vec<Category>,
    notifier: N,
}

impl<N: Notifier> CategoryList<N> {
    /// Create an empty list view backed by the given notifier
    pub fn new(notifier: N) -> Self {
        Self {
            categories: Vec::new(),
            notifier,
        }
    }

    /// Load the full category list
    ///
    /// Issues exactly one `list` call. On success the held collection is
    /// replaced with the fetched sequence, no merging or diffing. On
    /// failure the collection is left untouched and [`LOAD_FAILURE_MESSAGE`]
    /// is emitted once through the notifier. No retry, no re-fetch.
    pub async fn activate<A: CategoryApi>(&mut self, api: &A) {
        match api.list().await {
            Ok(categories) => self.categories = categories,
            Err(_) => self.notifier.notify(LOAD_FAILURE_MESSAGE),
        }
    }

    /// Currently held categories, in backend order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Whether the view holds no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
