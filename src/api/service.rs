//! Storefront API service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Method, RequestBuilder, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::{
    account::models::{AuthPayload, Credentials, NewAccount, User},
    api::{errors::ApiError, session::Session},
    catalog::models::{Brand, Category, Product, ProductFilter},
};

/// Configuration for connecting to the storefront backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `"http://localhost:8000/api/v1"`.
    pub base_url: String,
}

/// Typed operations against the storefront REST backend.
///
/// Each operation translates to exactly one HTTP request. Concurrent
/// calls are safe; the only shared state is the session token.
#[automock]
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Retrieve products, optionally narrowed by `filter`.
    async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, ApiError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: i64) -> Result<Product, ApiError>;

    /// Retrieve all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Retrieve a single category.
    async fn get_category(&self, id: i64) -> Result<Category, ApiError>;

    /// Retrieve all brands.
    async fn list_brands(&self) -> Result<Vec<Brand>, ApiError>;

    /// Retrieve a single brand.
    async fn get_brand(&self, id: i64) -> Result<Brand, ApiError>;

    /// Authenticate and, on a token-bearing response, start a session.
    async fn login(&self, credentials: Credentials) -> Result<AuthPayload, ApiError>;

    /// Create a new account. Does not start a session.
    async fn register(&self, account: NewAccount) -> Result<AuthPayload, ApiError>;

    /// End the session on the backend, then forget the local token.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Retrieve the authenticated user's profile.
    async fn get_profile(&self) -> Result<User, ApiError>;
}

/// HTTP client for the storefront backend.
#[derive(Debug, Clone)]
pub struct HttpStorefrontClient {
    config: ClientConfig,
    session: Session,
    http: Client,
}

impl HttpStorefrontClient {
    /// Create a new client over the given session.
    #[must_use]
    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self {
            config,
            session,
            http: Client::new(),
        }
    }

    /// Build a request for `path`, stamping the JSON content type and,
    /// when the session holds a token, the bearer authorization header.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.config.base_url);

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.bearer() {
            request = request.bearer_auth(token);
        }

        request
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;

        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Status { status });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefrontClient {
    async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, ApiError> {
        let mut request = self.request(Method::GET, "/products");

        let pairs = filter.query_pairs();

        if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        Self::send(request).await
    }

    async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        Self::send(self.request(Method::GET, &format!("/products/{id}"))).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Self::send(self.request(Method::GET, "/categories")).await
    }

    async fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        Self::send(self.request(Method::GET, &format!("/categories/{id}"))).await
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, ApiError> {
        Self::send(self.request(Method::GET, "/brands")).await
    }

    async fn get_brand(&self, id: i64) -> Result<Brand, ApiError> {
        Self::send(self.request(Method::GET, &format!("/brands/{id}"))).await
    }

    async fn login(&self, credentials: Credentials) -> Result<AuthPayload, ApiError> {
        let payload: AuthPayload =
            Self::send(self.request(Method::POST, "/login").json(&credentials)).await?;

        // A token-less success leaves any existing session untouched.
        if let Some(token) = &payload.token {
            self.session.set_token(token);
        }

        Ok(payload)
    }

    async fn register(&self, account: NewAccount) -> Result<AuthPayload, ApiError> {
        Self::send(self.request(Method::POST, "/register").json(&account)).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        // The local token survives a failed logout: the backend call
        // has to succeed before the session is forgotten.
        let _ack: serde_json::Value = Self::send(self.request(Method::POST, "/logout")).await?;

        self.session.clear();

        Ok(())
    }

    async fn get_profile(&self) -> Result<User, ApiError> {
        Self::send(self.request(Method::GET, "/profile")).await
    }
}
