//! Product detail screen controller.

use std::sync::Arc;

use tracing::error;

use crate::{
    api::StorefrontApi,
    catalog::models::Product,
    screens::{AlertSink, LoadPhase},
};

/// Data controller for a product detail screen, including the purchase
/// quantity selector clamped to the product's stock.
pub struct ProductScreen {
    api: Arc<dyn StorefrontApi>,
    alerts: Arc<dyn AlertSink>,
    product_id: i64,
    phase: LoadPhase,
    product: Option<Product>,
    quantity: u32,
}

impl ProductScreen {
    /// Create the controller for `product_id` in its initial loading
    /// phase.
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>, alerts: Arc<dyn AlertSink>, product_id: i64) -> Self {
        Self {
            api,
            alerts,
            product_id,
            phase: LoadPhase::Loading,
            product: None,
            quantity: 1,
        }
    }

    /// Load the product. A failure raises one alert and still settles
    /// the phase back to `Ready`.
    pub async fn load(&mut self) {
        match self.api.get_product(self.product_id).await {
            Ok(product) => self.product = Some(product),
            Err(err) => {
                error!(error = %err, product_id = self.product_id, "failed to load product");
                self.alerts
                    .alert("Error", "Failed to load product details. Please try again.");
            }
        }

        self.phase = LoadPhase::Ready;
    }

    /// Increase the purchase quantity, capped at the units in stock.
    /// A product with no stock cannot go above the presentational `1`.
    pub fn increment_quantity(&mut self) {
        let stock = self.product.as_ref().map_or(0, |product| product.stock);

        if self.quantity < stock {
            self.quantity += 1;
        }
    }

    /// Decrease the purchase quantity, floored at `1`.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Current load phase.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// The loaded product, once available.
    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// The selected purchase quantity.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
