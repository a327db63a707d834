//! Shipping address entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shipping address database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shipping_addresses")]
pub struct Model {
    /// Unique identifier for the address
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The account this address belongs to
    pub user_id: i64,
    /// Recipient's full name
    pub full_name: String,
    /// Country
    pub country: String,
    /// Region, state, or province
    pub region: String,
    /// City
    pub city: String,
    /// Postal code
    pub postcode: String,
    /// Street address
    pub address: String,
    /// Contact phone number
    pub phone: String,
}

/// Defines relationships between shipping addresses and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each address belongs to one account
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
