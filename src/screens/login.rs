//! Login screen controller.

use std::sync::Arc;

use tracing::error;

use crate::{
    account::models::Credentials,
    api::StorefrontApi,
    screens::AlertSink,
};

/// Data controller for the login form.
///
/// Required-field validation happens client-side, before any request is
/// issued; API failures surface as a single generic alert.
pub struct LoginScreen {
    api: Arc<dyn StorefrontApi>,
    alerts: Arc<dyn AlertSink>,
    email: String,
    password: String,
    busy: bool,
}

impl LoginScreen {
    /// Create the controller with empty form fields.
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>, alerts: Arc<dyn AlertSink>) -> Self {
        Self {
            api,
            alerts,
            email: String::new(),
            password: String::new(),
            busy: false,
        }
    }

    /// Update the email field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Update the password field.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Submit the form. Returns `true` when login succeeded and the
    /// caller should navigate on.
    ///
    /// Empty email or password alerts without issuing a request. The
    /// email is trimmed before submission; the busy flag clears on
    /// every path.
    pub async fn submit(&mut self) -> bool {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            self.alerts.alert("Error", "Please fill in all fields");
            return false;
        }

        self.busy = true;

        let credentials = Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };

        let outcome = self.api.login(credentials).await;

        self.busy = false;

        match outcome {
            Ok(_) => true,
            Err(err) => {
                error!(error = %err, "login failed");
                self.alerts
                    .alert("Login Failed", "Invalid email or password");
                false
            }
        }
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.busy
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use crate::{
        account::models::{AuthPayload, User},
        api::{ApiError, MockStorefrontApi},
        screens::MockAlertSink,
    };

    use super::*;

    fn auth_payload() -> AuthPayload {
        AuthPayload {
            user: User {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
            token: Some("abc".to_string()),
        }
    }

    #[tokio::test]
    async fn empty_fields_alert_without_issuing_a_request() {
        let mut api = MockStorefrontApi::new();
        api.expect_login().never();

        let mut alerts = MockAlertSink::new();
        alerts
            .expect_alert()
            .once()
            .withf(|_, message| message == "Please fill in all fields")
            .return_const(());

        let mut screen = LoginScreen::new(Arc::new(api), Arc::new(alerts));

        screen.set_email("ada@example.com");

        assert!(!screen.submit().await);
        assert!(!screen.busy());
    }

    #[tokio::test]
    async fn successful_login_trims_the_email() {
        let mut api = MockStorefrontApi::new();

        api.expect_login()
            .once()
            .withf(|credentials| credentials.email == "ada@example.com")
            .return_once(|_| Ok(auth_payload()));

        let mut alerts = MockAlertSink::new();
        alerts.expect_alert().never();

        let mut screen = LoginScreen::new(Arc::new(api), Arc::new(alerts));

        screen.set_email("  ada@example.com  ");
        screen.set_password("pw");

        assert!(screen.submit().await);
        assert!(!screen.busy());
    }

    #[tokio::test]
    async fn failed_login_alerts_once_and_clears_busy() {
        let mut api = MockStorefrontApi::new();

        api.expect_login().once().return_once(|_| {
            Err(ApiError::Status {
                status: StatusCode::UNAUTHORIZED,
            })
        });

        let mut alerts = MockAlertSink::new();
        alerts
            .expect_alert()
            .once()
            .withf(|title, _| title == "Login Failed")
            .return_const(());

        let mut screen = LoginScreen::new(Arc::new(api), Arc::new(alerts));

        screen.set_email("ada@example.com");
        screen.set_password("pw");

        assert!(!screen.submit().await);
        assert!(!screen.busy());
    }
}
