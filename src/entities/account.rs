//! Account entity - Minimal stand-in for the external identity system.
//!
//! Authentication itself is out of scope; this table exists so carts,
//! rates, and shipping addresses have a user to hang off.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique login name
    #[sea_orm(unique)]
    pub username: String,
    /// Contact e-mail address
    pub email: String,
}

/// Defines relationships between accounts and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One account owns many cart items
    #[sea_orm(has_many = "super::cart::Entity")]
    Cart,
    /// One account posts many rates
    #[sea_orm(has_many = "super::rate::Entity")]
    Rates,
    /// One account has many shipping addresses
    #[sea_orm(has_many = "super::shipping_address::Entity")]
    Addresses,
}

impl Related<super::cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cart.def()
    }
}

impl Related<super::rate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rates.def()
    }
}

impl Related<super::shipping_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
