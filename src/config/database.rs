//! Database configuration module for the storefront.
//!
//! Handles `SQLite` connection setup and table creation using `SeaORM`.
//! Tables are generated from the entity definitions via
//! `Schema::create_table_from_entity`, so the database schema always
//! matches the Rust structs without hand-written SQL.

use crate::entities::{
    Account, Cart, Category, ClothingProduct, FoodProduct, Rate, ShippingAddress,
    SmartphoneProduct, Specification, TvProduct,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default
/// local `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/storefront.sqlite".to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`,
/// falling back to a local `SQLite` file.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(&get_database_url()).await.map_err(Into::into)
}

/// Creates all storefront tables from the entity definitions. Existing
/// tables are left alone, so this is safe to run on every startup.
///
/// # Errors
/// Returns an error if a table creation statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(Category),
        schema.create_table_from_entity(TvProduct),
        schema.create_table_from_entity(SmartphoneProduct),
        schema.create_table_from_entity(ClothingProduct),
        schema.create_table_from_entity(FoodProduct),
        schema.create_table_from_entity(Specification),
        schema.create_table_from_entity(Account),
        schema.create_table_from_entity(Cart),
        schema.create_table_from_entity(Rate),
        schema.create_table_from_entity(ShippingAddress),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CategoryModel, SpecificationModel, TvProductModel};
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Tables exist if we can query them
        let _: Vec<CategoryModel> = Category::find().limit(1).all(&db).await?;
        let _: Vec<TvProductModel> = TvProduct::find().limit(1).all(&db).await?;
        let _: Vec<SpecificationModel> = Specification::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
