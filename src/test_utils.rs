//! Shared test utilities for the storefront.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use crate::{
    core::{
        account, category,
        product::{self, NewProduct, Product, ProductDetails},
        specification::{self, SpecificationInput},
    },
    entities::{
        Specification, account as account_entity, category as category_entity,
        enums::{ProductKind, Unit},
        specification as specification_entity,
    },
    errors::Result,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a category with no parent.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
    kind: ProductKind,
) -> Result<category_entity::Model> {
    category::create_category(db, name.to_string(), kind, None).await
}

/// Creates a test account with a placeholder e-mail address.
pub async fn create_test_account(
    db: &DatabaseConnection,
    username: &str,
) -> Result<account_entity::Model> {
    account::create_account(db, username.to_string(), format!("{username}@shop.test")).await
}

/// Parameters for a TV product with placeholder characteristics.
#[must_use]
pub fn new_tv_product(name: &str, category_id: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        marking: "X-100".to_string(),
        image: "shop/tv.png".to_string(),
        description: String::new(),
        unit: Unit::Piece,
        unit_for_weight_vol: Unit::Kilogram,
        category_id,
        details: ProductDetails::Tv {
            screen_diagonal: "55\"".to_string(),
            screen_resolution: "3840x2160".to_string(),
        },
    }
}

/// Parameters for a smartphone product with placeholder characteristics.
#[must_use]
pub fn new_smartphone_product(name: &str, category_id: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        marking: "Pro".to_string(),
        image: "shop/phone.png".to_string(),
        description: String::new(),
        unit: Unit::Piece,
        unit_for_weight_vol: Unit::Kilogram,
        category_id,
        details: ProductDetails::Smartphone {
            ram: "8 GB".to_string(),
            memory: "256 GB".to_string(),
        },
    }
}

/// Creates a "TV" category and one TV product inside it.
pub async fn create_tv_with_category(db: &DatabaseConnection) -> Result<Product> {
    let category = create_test_category(db, "TV", ProductKind::Tv).await?;
    product::create_product(db, new_tv_product("Bravia", category.id)).await
}

/// A valid specification input with sensible defaults:
/// price 100.00, no discount, 10 units in stock.
#[must_use]
pub fn default_spec_input() -> SpecificationInput {
    SpecificationInput {
        tag: String::new(),
        image: None,
        pre_packing: Decimal::ONE,
        weight_vol: Decimal::ONE,
        price: Decimal::new(10000, 2),
        discount: 0,
        sale_price: Decimal::ZERO,
        available_qty: Decimal::TEN,
        addition: String::new(),
    }
}

/// Creates a specification with default input for the given product.
pub async fn create_test_spec(
    db: &DatabaseConnection,
    kind: ProductKind,
    object_id: i64,
) -> Result<specification_entity::Model> {
    specification::create_specification(db, kind, object_id, default_spec_input()).await
}

/// Backdates a specification, bypassing the write path that always stamps
/// the current date. Used by new-arrival window tests.
pub async fn set_specification_date(
    db: &DatabaseConnection,
    id: i64,
    date: NaiveDate,
) -> Result<specification_entity::Model> {
    let spec = Specification::find_by_id(id)
        .one(db)
        .await?
        .ok_or(crate::errors::Error::SpecificationNotFound { id })?;

    let mut spec = spec.into_active_model();
    spec.date_added = Set(date);
    spec.update(db).await.map_err(Into::into)
}
