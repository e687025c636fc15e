//! E-Shop storefront client core.
//!
//! A thin presentation/state-synchronization layer over a remote
//! storefront REST backend: a typed [`api::StorefrontApi`] client plus
//! the per-screen data controllers in [`screens`] that load, filter,
//! and refresh catalog data on top of it. All authoritative data and
//! business rules live on the backend; the client holds nothing beyond
//! an in-memory session token and whatever each screen last fetched.

pub mod account;
pub mod api;
pub mod catalog;
pub mod config;
pub mod context;
pub mod screens;
