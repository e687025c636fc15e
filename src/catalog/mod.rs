//! Catalog data model.

pub mod models;

pub use models::{Brand, Category, Product, ProductFilter};
