//! Food product entity. Carries only the shared base columns.

use super::enums::Unit;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Food product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product
    pub name: String,
    /// Model or the main feature of the product
    pub marking: String,
    /// Path to the product image
    pub image: String,
    /// Free-text product description
    pub description: String,
    /// Unit the product is sold in
    pub unit: Unit,
    /// Unit its weight or volume is measured in
    pub unit_for_weight_vol: Unit,
    /// When the product was added to the catalog
    pub date_added: Date,
    /// The category this product belongs to
    pub category_id: i64,
}

/// Defines relationships between food products and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
