//! Category entity - Polymorphic, optionally-nested classification nodes.
//!
//! Each category points at exactly one concrete product table via
//! `product_kind`. A category with no parent is a top-level catalog entry;
//! subcategories may target a different product kind than their parent,
//! which is what makes mixed-kind category listings possible.

use super::enums::ProductKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique, human-readable category name (e.g. "Electronics", "TV")
    #[sea_orm(unique)]
    pub name: String,
    /// Parent category id, None for top-level catalog entries
    pub parent_id: Option<i64>,
    /// The concrete product table this category's members live in
    pub product_kind: ProductKind,
}

/// Defines the self-referential parent/children tree
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each category optionally belongs to one parent category
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
    /// One category has many subcategories
    #[sea_orm(has_many = "Entity")]
    Children,
}

impl Related<Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
