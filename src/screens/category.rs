//! Category detail screen controller.

use std::sync::Arc;

use tracing::error;

use crate::{
    api::StorefrontApi,
    catalog::models::{Category, Product, ProductFilter},
    screens::{AlertSink, LoadPhase},
};

/// Data controller for a category detail screen.
///
/// Loads the category and its products together, then filters the
/// already-loaded list in memory as the user types — text search here
/// never issues a request.
pub struct CategoryScreen {
    api: Arc<dyn StorefrontApi>,
    alerts: Arc<dyn AlertSink>,
    category_id: i64,
    phase: LoadPhase,
    category: Option<Category>,
    products: Vec<Product>,
    filtered: Vec<Product>,
    search_query: String,
}

impl CategoryScreen {
    /// Create the controller for `category_id` in its initial loading
    /// phase.
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>, alerts: Arc<dyn AlertSink>, category_id: i64) -> Self {
        Self {
            api,
            alerts,
            category_id,
            phase: LoadPhase::Loading,
            category: None,
            products: Vec::new(),
            filtered: Vec::new(),
            search_query: String::new(),
        }
    }

    /// Load the category and its products concurrently.
    ///
    /// All-or-nothing: if either fetch fails, both results are
    /// discarded and a single alert is raised. The phase always
    /// settles back to `Ready`.
    pub async fn load(&mut self) {
        let loaded = tokio::try_join!(
            self.api.get_category(self.category_id),
            self.api.list_products(ProductFilter::by_category(self.category_id)),
        );

        match loaded {
            Ok((category, products)) => {
                self.category = Some(category);
                self.filtered = products.clone();
                self.products = products;
            }
            Err(err) => {
                error!(error = %err, category_id = self.category_id, "failed to load category data");
                self.alerts
                    .alert("Error", "Failed to load category data. Please try again.");
            }
        }

        self.phase = LoadPhase::Ready;
    }

    /// Filter the loaded products in memory.
    ///
    /// Matches case-insensitively against name or description
    /// substrings; an empty or whitespace-only query restores the full
    /// unfiltered list.
    pub fn search(&mut self, query: &str) {
        self.search_query = query.to_string();

        if query.trim().is_empty() {
            self.filtered = self.products.clone();
            return;
        }

        let needle = query.to_lowercase();

        self.filtered = self
            .products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
    }

    /// Pull-to-refresh: clear the search term, then reload.
    pub async fn refresh(&mut self) {
        self.phase = LoadPhase::Refreshing;
        self.search_query.clear();

        self.load().await;
    }

    /// Current load phase.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// The loaded category, once available.
    #[must_use]
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Products currently shown, after any active search filter.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.filtered
    }

    /// The last submitted search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }
}
