//! Core business logic - framework-agnostic storefront operations.
//!
//! Write paths (specifications, carts, rates, products, categories,
//! accounts, addresses) validate before touching the store and keep the
//! derived discount price consistent; the catalog module is the pure
//! read path that composes the listings.

/// Account creation and lookup
pub mod account;
/// Shipping address management
pub mod address;
/// Shopping cart operations and distinct-customer counts
pub mod cart;
/// Catalog query builder: category, new-arrival, popular, home listings
pub mod catalog;
/// Category tree lookup, creation, and seeding
pub mod category;
/// Admin image upload validation
pub mod image;
/// Discount price computation and display-price resolution
pub mod pricing;
/// The product tagged union and generic-reference registry
pub mod product;
/// Rates and average-rating aggregation
pub mod rate;
/// Specification writes with derived-price recomputation
pub mod specification;
