//! Specification entity - The priceable, stockable variant of a product.
//!
//! A specification is the unit that actually lands in carts: a concrete
//! size/color/pack of a product, with its own price, discount, and stock
//! level. `discount_price` is derived and recomputed on every write by
//! [`crate::core::specification`]; it is never set by callers directly.
//! The `(product_kind, object_id)` pair generically references the owning
//! product in any of the four product tables.

use super::enums::ProductKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Specification database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "specifications")]
pub struct Model {
    /// Unique identifier for the specification
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short variant tag (e.g. "black", "2-pack"), may be empty
    pub tag: String,
    /// Path to a variant-specific image, None to fall back to the product image
    pub image: Option<String>,
    /// Pre-packing factor, at least 0.001
    #[sea_orm(column_type = "Decimal(Some((6, 3)))")]
    pub pre_packing: Decimal,
    /// Weight or volume per unit, at least 0.001
    #[sea_orm(column_type = "Decimal(Some((6, 3)))")]
    pub weight_vol: Decimal,
    /// Base price, at least 0.01
    #[sea_orm(column_type = "Decimal(Some((9, 2)))")]
    pub price: Decimal,
    /// Discount percentage from 0 to 99
    pub discount: i32,
    /// Derived: price minus the rounded discount amount
    #[sea_orm(column_type = "Decimal(Some((9, 2)))")]
    pub discount_price: Decimal,
    /// Flat override price; nonzero replaces the discount price for display,
    /// zero disables the override
    #[sea_orm(column_type = "Decimal(Some((9, 2)))")]
    pub sale_price: Decimal,
    /// Stock on hand, never negative
    #[sea_orm(column_type = "Decimal(Some((8, 3)))")]
    pub available_qty: Decimal,
    /// Additional information, may be empty
    pub addition: String,
    /// When the specification was added
    pub date_added: Date,
    /// Which product table the owning product lives in
    pub product_kind: ProductKind,
    /// The owning product's id within that table
    pub object_id: i64,
}

/// Defines relationships between specifications and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One specification appears in many carts
    #[sea_orm(has_many = "super::cart::Entity")]
    Cart,
}

impl Related<super::cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
