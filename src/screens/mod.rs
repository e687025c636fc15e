//! Screen data controllers.
//!
//! Each controller fetches what its screen needs, exposes the load
//! phase, and applies the screen's search policy. Controllers are the
//! sole error boundary: every fetch failure raises exactly one
//! user-facing alert via [`AlertSink`], logs the detail, and still
//! lands the screen back in [`LoadPhase::Ready`] — no failure leaves a
//! screen stuck loading.

pub mod category;
pub mod home;
pub mod login;
pub mod product;

pub use category::CategoryScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use product::ProductScreen;

use mockall::automock;

/// Phase of a screen's data lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// The first fetch is still in flight.
    Loading,
    /// Data (or an error alert) has settled; the screen is interactive.
    Ready,
    /// A pull-to-refresh reload is in flight.
    Refreshing,
}

/// Sink for user-facing alerts raised by screen controllers.
#[automock]
pub trait AlertSink: Send + Sync {
    /// Present an alert to the user.
    fn alert(&self, title: &str, message: &str);
}

/// Alert sink that forwards alerts to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlerts;

impl AlertSink for TracingAlerts {
    fn alert(&self, title: &str, message: &str) {
        tracing::warn!(title, message, "user alert");
    }
}
