//! Closed string-valued enums shared across entities.
//!
//! `ProductKind` is the discriminator half of the generic product reference:
//! a `(ProductKind, object_id)` pair stands in for a typed foreign key so
//! that one specification or rate row can attach to any of the four
//! otherwise-unrelated product tables.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Discriminator naming one of the four concrete product tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Televisions (`tv_products` table)
    #[sea_orm(string_value = "tv")]
    Tv,
    /// Smartphones (`smartphone_products` table)
    #[sea_orm(string_value = "smartphone")]
    Smartphone,
    /// Clothing (`clothing_products` table)
    #[sea_orm(string_value = "clothing")]
    Clothing,
    /// Foodstuffs (`food_products` table)
    #[sea_orm(string_value = "food")]
    Food,
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Tv => "TV",
            Self::Smartphone => "smartphone",
            Self::Clothing => "clothing",
            Self::Food => "foodstuff",
        };
        write!(f, "{name}")
    }
}

/// Unit of measure a product is sold in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum Unit {
    /// Kilogram
    #[sea_orm(string_value = "KG")]
    Kilogram,
    /// Pound
    #[sea_orm(string_value = "LB")]
    Pound,
    /// Litre
    #[sea_orm(string_value = "L")]
    Litre,
    /// Gallon
    #[sea_orm(string_value = "GL")]
    Gallon,
    /// Piece
    #[sea_orm(string_value = "PC")]
    Piece,
    /// Pack
    #[sea_orm(string_value = "PK")]
    Pack,
    /// Pair
    #[sea_orm(string_value = "PR")]
    Pair,
    /// Bottle
    #[sea_orm(string_value = "BL")]
    Bottle,
    /// Lot
    #[sea_orm(string_value = "LT")]
    Lot,
}

/// Target audience for clothing products.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum Gender {
    /// Men's clothing
    #[sea_orm(string_value = "M")]
    Men,
    /// Women's clothing
    #[sea_orm(string_value = "W")]
    Women,
    /// Kids' clothing
    #[sea_orm(string_value = "K")]
    Kids,
}

/// Clothing size scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum ClothingSize {
    /// Small
    #[sea_orm(string_value = "S")]
    S,
    /// Medium
    #[sea_orm(string_value = "M")]
    M,
    /// Large
    #[sea_orm(string_value = "L")]
    L,
    /// Extra large
    #[sea_orm(string_value = "XL")]
    Xl,
    /// Double extra large
    #[sea_orm(string_value = "2X")]
    Xxl,
}
