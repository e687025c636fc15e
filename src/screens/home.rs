//! Home screen controller.

use std::sync::Arc;

use tracing::error;

use crate::{
    api::StorefrontApi,
    catalog::models::{Category, Product, ProductFilter},
    screens::{AlertSink, LoadPhase},
};

/// Data controller for the home screen: the full product grid, the
/// category chips (with the synthetic "All" entry injected at the
/// head), and a backend-driven search box.
pub struct HomeScreen {
    api: Arc<dyn StorefrontApi>,
    alerts: Arc<dyn AlertSink>,
    phase: LoadPhase,
    products: Vec<Product>,
    categories: Vec<Category>,
    selected_category: Option<Category>,
    search_query: String,
}

impl HomeScreen {
    /// Create the controller in its initial loading phase.
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>, alerts: Arc<dyn AlertSink>) -> Self {
        Self {
            api,
            alerts,
            phase: LoadPhase::Loading,
            products: Vec::new(),
            categories: Vec::new(),
            selected_category: None,
            search_query: String::new(),
        }
    }

    /// Load products and categories concurrently.
    ///
    /// The two fetches are joined all-or-nothing: if either fails, both
    /// results are discarded, one alert is raised, and the previous
    /// state is kept. The phase always settles back to `Ready`.
    pub async fn load(&mut self) {
        let loaded = tokio::try_join!(
            self.api.list_products(ProductFilter::default()),
            self.api.list_categories(),
        );

        match loaded {
            Ok((products, categories)) => {
                self.products = products;
                self.categories = std::iter::once(Category::all())
                    .chain(categories)
                    .collect();
            }
            Err(err) => {
                error!(error = %err, "failed to load home screen data");
                self.alerts
                    .alert("Error", "Failed to load data. Please try again.");
            }
        }

        self.phase = LoadPhase::Ready;
    }

    /// Select a category chip and refetch the grid with its filter.
    ///
    /// Selecting the "All" sentinel clears the selection and refetches
    /// without any `category_id` — the sentinel never reaches the
    /// backend.
    pub async fn select_category(&mut self, category: Category) {
        let filter = if category.is_all() {
            ProductFilter::default()
        } else {
            ProductFilter::by_category(category.id)
        };

        self.selected_category = (!category.is_all()).then_some(category);
        self.phase = LoadPhase::Loading;

        match self.api.list_products(filter).await {
            Ok(products) => self.products = products,
            Err(err) => {
                error!(error = %err, "failed to filter products by category");
                self.alerts.alert("Error", "Failed to filter products.");
            }
        }

        self.phase = LoadPhase::Ready;
    }

    /// Submit a search query.
    ///
    /// A non-empty-after-trim query refetches the grid with the backend
    /// `search` parameter; an empty or whitespace-only query triggers
    /// the full base reload instead.
    pub async fn search(&mut self, query: &str) {
        self.search_query = query.to_string();

        if query.trim().is_empty() {
            self.load().await;
            return;
        }

        self.phase = LoadPhase::Loading;

        match self.api.list_products(ProductFilter::with_search(query)).await {
            Ok(products) => self.products = products,
            Err(err) => {
                error!(error = %err, "failed to search products");
                self.alerts.alert("Error", "Failed to search products.");
            }
        }

        self.phase = LoadPhase::Ready;
    }

    /// Pull-to-refresh: reset the search term and category selection,
    /// then reissue the base load.
    pub async fn refresh(&mut self) {
        self.phase = LoadPhase::Refreshing;
        self.selected_category = None;
        self.search_query.clear();

        self.load().await;
    }

    /// Current load phase.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Products currently shown.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category chips, starting with the synthetic "All" entry.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The selected category, if any real one is active.
    #[must_use]
    pub fn selected_category(&self) -> Option<&Category> {
        self.selected_category.as_ref()
    }

    /// The last submitted search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use crate::{
        api::{ApiError, MockStorefrontApi},
        screens::MockAlertSink,
    };

    use super::*;

    fn make_product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            price: 0.0,
            stock: 1,
            category_id: 0,
            brand_id: 0,
            image: String::new(),
            category: None,
            brand: None,
        }
    }

    fn make_category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: String::new(),
            products: None,
        }
    }

    fn quiet_alerts() -> MockAlertSink {
        let mut alerts = MockAlertSink::new();
        alerts.expect_alert().never();
        alerts
    }

    fn status_error() -> ApiError {
        ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[tokio::test]
    async fn load_injects_all_sentinel_ahead_of_categories() {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .once()
            .withf(|filter| filter.query_pairs().is_empty())
            .return_once(|_| Ok(vec![make_product(1, "Red Shoe")]));
        api.expect_list_categories()
            .once()
            .return_once(|| Ok(vec![make_category(3, "Shoes")]));

        let mut screen = HomeScreen::new(Arc::new(api), Arc::new(quiet_alerts()));

        screen.load().await;

        assert_eq!(screen.phase(), LoadPhase::Ready);
        assert_eq!(screen.products().len(), 1);
        assert_eq!(
            screen
                .categories()
                .iter()
                .map(|category| category.name.as_str())
                .collect::<Vec<_>>(),
            vec!["All", "Shoes"]
        );
    }

    #[tokio::test]
    async fn one_failed_fetch_discards_both_results_and_alerts_once() {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .once()
            .return_once(|_| Ok(vec![make_product(1, "Red Shoe")]));
        api.expect_list_categories()
            .once()
            .return_once(|| Err(status_error()));

        let mut alerts = MockAlertSink::new();
        alerts
            .expect_alert()
            .once()
            .withf(|title, _| title == "Error")
            .return_const(());

        let mut screen = HomeScreen::new(Arc::new(api), Arc::new(alerts));

        screen.load().await;

        // Neither partial result is committed, but the screen settles.
        assert!(screen.products().is_empty());
        assert!(screen.categories().is_empty());
        assert_eq!(screen.phase(), LoadPhase::Ready);
    }

    #[tokio::test]
    async fn selecting_all_sentinel_fetches_without_category_filter() {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .once()
            .withf(|filter| filter.category_id.is_none())
            .return_once(|_| Ok(vec![]));

        let mut screen = HomeScreen::new(Arc::new(api), Arc::new(quiet_alerts()));

        screen.select_category(Category::all()).await;

        assert!(screen.selected_category().is_none());
        assert_eq!(screen.phase(), LoadPhase::Ready);
    }

    #[tokio::test]
    async fn selecting_real_category_fetches_with_its_id() {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .once()
            .withf(|filter| filter.category_id == Some(3))
            .return_once(|_| Ok(vec![make_product(1, "Red Shoe")]));

        let mut screen = HomeScreen::new(Arc::new(api), Arc::new(quiet_alerts()));

        screen.select_category(make_category(3, "Shoes")).await;

        assert_eq!(
            screen.selected_category().map(|category| category.id),
            Some(3)
        );
        assert_eq!(screen.products().len(), 1);
    }

    #[tokio::test]
    async fn search_queries_backend_with_term() {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .once()
            .withf(|filter| filter.search.as_deref() == Some("red"))
            .return_once(|_| Ok(vec![make_product(1, "Red Shoe")]));
        api.expect_list_categories().never();

        let mut screen = HomeScreen::new(Arc::new(api), Arc::new(quiet_alerts()));

        screen.search("red").await;

        assert_eq!(screen.search_query(), "red");
        assert_eq!(screen.products().len(), 1);
    }

    #[tokio::test]
    async fn whitespace_search_triggers_full_reload() {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .once()
            .withf(|filter| filter.query_pairs().is_empty())
            .return_once(|_| Ok(vec![]));
        api.expect_list_categories().once().return_once(|| Ok(vec![]));

        let mut screen = HomeScreen::new(Arc::new(api), Arc::new(quiet_alerts()));

        screen.search("   ").await;

        assert_eq!(screen.phase(), LoadPhase::Ready);
    }

    #[tokio::test]
    async fn refresh_resets_search_and_selection_before_reloading() {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .times(3)
            .returning(|_| Ok(vec![]));
        api.expect_list_categories()
            .once()
            .return_once(|| Ok(vec![]));

        let mut screen = HomeScreen::new(Arc::new(api), Arc::new(quiet_alerts()));

        screen.select_category(make_category(3, "Shoes")).await;
        screen.search("red").await;

        screen.refresh().await;

        assert!(screen.selected_category().is_none());
        assert_eq!(screen.search_query(), "");
        assert_eq!(screen.phase(), LoadPhase::Ready);
    }

    #[tokio::test]
    async fn failed_search_still_settles_the_screen() {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .once()
            .return_once(|_| Err(status_error()));

        let mut alerts = MockAlertSink::new();
        alerts.expect_alert().once().return_const(());

        let mut screen = HomeScreen::new(Arc::new(api), Arc::new(alerts));

        screen.search("red").await;

        assert_eq!(screen.phase(), LoadPhase::Ready);
    }
}
