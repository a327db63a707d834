//! Cart entity - Links a user to a specification they intend to purchase.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cart item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cart_items")]
pub struct Model {
    /// Unique identifier for the cart row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The specification being purchased
    pub specification_id: i64,
    /// The account making the purchase
    pub user_id: i64,
    /// Number of units, at least 1
    pub quantity: i32,
}

/// Defines relationships between cart items and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each cart item references one specification
    #[sea_orm(
        belongs_to = "super::specification::Entity",
        from = "Column::SpecificationId",
        to = "super::specification::Column::Id"
    )]
    Specification,
    /// Each cart item belongs to one account
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::UserId",
        to = "super::account::Column::Id"
    )]
    Account,
}

impl Related<super::specification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specification.def()
    }
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
