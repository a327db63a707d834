//! Rate entity - A user review attached generically to a product.
//!
//! The `(product_kind, object_id)` pair mirrors the specification's generic
//! reference, so ratings aggregate per product regardless of which concrete
//! table the product lives in. Rates are immutable once posted.

use super::enums::ProductKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Rate database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rates")]
pub struct Model {
    /// Unique identifier for the rate
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Rating points, 1 to 5
    pub point: i32,
    /// Free-text review, may be empty
    pub review: String,
    /// The account that posted the rate
    pub user_id: i64,
    /// Which product table the rated product lives in
    pub product_kind: ProductKind,
    /// The rated product's id within that table
    pub object_id: i64,
}

/// Defines relationships between rates and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each rate belongs to one account
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::UserId",
        to = "super::account::Column::Id"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
