//! Unified error types for the storefront.
//!
//! `*NotFound` variants are user-visible lookup failures, `Invalid*`
//! variants are validation failures that prevent any write from happening,
//! and `Database` wraps unexpected storage-layer errors that propagate
//! as fatal.

use crate::entities::enums::ProductKind;
use rust_decimal::Decimal;
use thiserror::Error;

/// All errors produced by the storefront crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or parsing problem
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// No category matches the given name (case-insensitive lookup)
    #[error("No category matches the given name: {name}")]
    CategoryNotFound {
        /// The name that was looked up
        name: String,
    },

    /// No specification with the given id exists
    #[error("Specification not found: {id}")]
    SpecificationNotFound {
        /// The specification primary key
        id: i64,
    },

    /// The generic product reference does not resolve to a row
    #[error("Product not found: {kind} #{id}")]
    ProductNotFound {
        /// The product table the reference points at
        kind: ProductKind,
        /// The instance id within that table
        id: i64,
    },

    /// No account matches the given username
    #[error("Account not found: {username}")]
    AccountNotFound {
        /// The username that was looked up
        username: String,
    },

    /// No cart item with the given id exists
    #[error("Cart item not found: {id}")]
    CartItemNotFound {
        /// The cart row primary key
        id: i64,
    },

    /// No shipping address with the given id exists for the user
    #[error("Shipping address not found: {id}")]
    AddressNotFound {
        /// The address primary key
        id: i64,
    },

    /// Price below the minimum of 0.01
    #[error("Price must be at least 0.01, got {price}")]
    InvalidPrice {
        /// The rejected price
        price: Decimal,
    },

    /// Discount outside the permitted 0..=99 range
    #[error("Discount must be between 0 and 99, got {discount}")]
    InvalidDiscount {
        /// The rejected discount percentage
        discount: i32,
    },

    /// A decimal quantity field violated its lower bound
    #[error("{field} must be at least {min}, got {value}")]
    InvalidAmount {
        /// Name of the offending field
        field: &'static str,
        /// Minimum permitted value
        min: Decimal,
        /// The rejected value
        value: Decimal,
    },

    /// Cart quantity below 1
    #[error("Quantity must be at least 1, got {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i32,
    },

    /// Rating point outside 1..=5
    #[error("Rating point must be between 1 and 5, got {point}")]
    InvalidPoint {
        /// The rejected point value
        point: i32,
    },

    /// Uploaded image below the minimum pixel dimensions
    #[error("Image sizes are smaller than {min_width}x{min_height} pixels: got {width}x{height}")]
    ImageTooSmall {
        /// Actual image width in pixels
        width: u32,
        /// Actual image height in pixels
        height: u32,
        /// Required minimum width
        min_width: u32,
        /// Required minimum height
        min_height: u32,
    },

    /// Uploaded image file over the maximum size
    #[error("Uploaded file over {max_megabytes} MB: got {size} bytes")]
    FileTooLarge {
        /// Actual file size in bytes
        size: u64,
        /// Maximum permitted size in megabytes
        max_megabytes: u64,
    },

    /// Storage-layer failure, unexpected and fatal
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error, e.g. while reading config.toml
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
