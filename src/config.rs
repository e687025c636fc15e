//! Client configuration.

use clap::Args;

/// Storefront backend connection settings.
#[derive(Debug, Args)]
pub struct BackendConfig {
    /// Storefront API base URL
    #[arg(
        long,
        env = "ESHOP_API_BASE_URL",
        default_value = "http://192.168.0.202:8000/api/v1"
    )]
    pub base_url: String,

    /// Bearer token for authenticated endpoints
    #[arg(long, env = "ESHOP_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Static asset host settings used to resolve product image URLs.
#[derive(Debug, Args)]
pub struct AssetConfig {
    /// Static asset host prefix for relative image paths
    #[arg(
        long = "assets-base-url",
        env = "ESHOP_ASSETS_BASE_URL",
        default_value = "http://192.168.0.202:8000/storage"
    )]
    pub base_url: String,

    /// Image URL used when a product has no image
    #[arg(
        long,
        env = "ESHOP_PLACEHOLDER_IMAGE_URL",
        default_value = "https://via.placeholder.com/200x200?text=No+Image"
    )]
    pub placeholder_image: String,
}
