//! Catalog models.
//!
//! Plain backend-defined records. Fields the backend may omit default
//! via serde; the backend stays the single source of truth and nothing
//! here is reconciled client-side.

use serde::{Deserialize, Serialize};

use crate::config::AssetConfig;

/// Product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Backend identity.
    pub id: i64,
    /// Display name; may be empty.
    #[serde(default)]
    pub name: String,
    /// Display description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Decimal price; rendered through [`Product::price_label`].
    #[serde(default)]
    pub price: f64,
    /// Units in stock; `0` means unavailable for purchase.
    #[serde(default)]
    pub stock: u32,
    /// Owning category.
    #[serde(default)]
    pub category_id: i64,
    /// Owning brand.
    #[serde(default)]
    pub brand_id: i64,
    /// Image path relative to the static-asset host.
    #[serde(default)]
    pub image: String,
    /// Denormalized category, present only when the backend embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Denormalized brand, present only when the backend embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
}

impl Product {
    /// Price rendered to two fraction digits; an absent or zero price
    /// renders as `"0.00"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// Display URL for the product image: the relative path joined onto
    /// the asset host, or the placeholder when no image is set.
    #[must_use]
    pub fn image_url(&self, assets: &AssetConfig) -> String {
        if self.image.is_empty() {
            assets.placeholder_image.clone()
        } else {
            format!("{}/{}", assets.base_url, self.image)
        }
    }
}

/// Category record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Backend identity; `0` is reserved for the client-side sentinel.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Display description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Denormalized products, present only when the backend embeds them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl Category {
    /// The synthetic "All" entry shown ahead of the real categories.
    ///
    /// It exists only client-side to represent "no filter" and must
    /// never be sent to the backend as a `category_id`.
    #[must_use]
    pub fn all() -> Self {
        Self {
            id: 0,
            name: "All".to_string(),
            description: "All products".to_string(),
            products: None,
        }
    }

    /// Whether this is the synthetic "All" sentinel.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.id == 0
    }
}

/// Brand record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    /// Backend identity.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Display description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Denormalized products, present only when the backend embeds them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

/// Optional narrowing of a product listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Restrict to a category; `Some(0)` is treated as unset.
    pub category_id: Option<i64>,
    /// Restrict to a brand; `Some(0)` is treated as unset.
    pub brand_id: Option<i64>,
    /// Backend search term; empty is treated as unset.
    pub search: Option<String>,
}

impl ProductFilter {
    /// Filter by category.
    #[must_use]
    pub fn by_category(category_id: i64) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    /// Filter by brand.
    #[must_use]
    pub fn by_brand(brand_id: i64) -> Self {
        Self {
            brand_id: Some(brand_id),
            ..Self::default()
        }
    }

    /// Filter by a backend search term.
    #[must_use]
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }

    /// Serialize the filter as URL query pairs.
    ///
    /// Falsy values are omitted entirely: unset fields, empty search
    /// terms, and the `0` id sentinel (the client-side "All" category)
    /// never reach the backend.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(id) = self.category_id.filter(|id| *id != 0) {
            pairs.push(("category_id", id.to_string()));
        }

        if let Some(id) = self.brand_id.filter(|id| *id != 0) {
            pairs.push(("brand_id", id.to_string()));
        }

        if let Some(search) = self.search.as_deref().filter(|search| !search.is_empty()) {
            pairs.push(("search", search.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn price_label_pads_to_two_fraction_digits() -> TestResult {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 1,
            "price": 9.5,
        }))?;

        assert_eq!(product.price_label(), "9.50");

        Ok(())
    }

    #[test]
    fn price_label_defaults_to_zero_when_price_absent() -> TestResult {
        let product: Product = serde_json::from_value(serde_json::json!({ "id": 1 }))?;

        assert_eq!(product.price_label(), "0.00");

        Ok(())
    }

    #[test]
    fn image_url_joins_relative_path_onto_asset_host() -> TestResult {
        let assets = AssetConfig {
            base_url: "http://localhost:8000/storage".to_string(),
            placeholder_image: "http://placeholder/none.png".to_string(),
        };

        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 1,
            "image": "products/shoe.png",
        }))?;

        assert_eq!(
            product.image_url(&assets),
            "http://localhost:8000/storage/products/shoe.png"
        );

        Ok(())
    }

    #[test]
    fn image_url_falls_back_to_placeholder() -> TestResult {
        let assets = AssetConfig {
            base_url: "http://localhost:8000/storage".to_string(),
            placeholder_image: "http://placeholder/none.png".to_string(),
        };

        let product: Product = serde_json::from_value(serde_json::json!({ "id": 1 }))?;

        assert_eq!(product.image_url(&assets), "http://placeholder/none.png");

        Ok(())
    }

    #[test]
    fn all_sentinel_is_recognized() {
        assert!(Category::all().is_all());
        assert_eq!(Category::all().name, "All");

        let real = Category {
            id: 3,
            name: "Shoes".to_string(),
            description: String::new(),
            products: None,
        };

        assert!(!real.is_all());
    }

    #[test]
    fn empty_filter_produces_no_query_pairs() {
        assert!(ProductFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn zero_id_sentinel_is_omitted_from_query_pairs() {
        let filter = ProductFilter {
            category_id: Some(0),
            brand_id: Some(0),
            search: None,
        };

        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn empty_search_is_omitted_from_query_pairs() {
        assert!(ProductFilter::with_search("").query_pairs().is_empty());
    }

    #[test]
    fn set_fields_are_serialized_in_order() {
        let filter = ProductFilter {
            category_id: Some(4),
            brand_id: None,
            search: Some("shoe".to_string()),
        };

        assert_eq!(
            filter.query_pairs(),
            vec![
                ("category_id", "4".to_string()),
                ("search", "shoe".to_string()),
            ]
        );
    }

    #[test]
    fn embedded_relations_deserialize_when_present() -> TestResult {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Red Shoe",
            "category": { "id": 3, "name": "Shoes" },
        }))?;

        let category = product.category.ok_or("category should be embedded")?;

        assert_eq!(category.name, "Shoes");
        assert!(product.brand.is_none());

        Ok(())
    }
}
