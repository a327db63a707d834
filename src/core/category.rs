//! Category business logic - Lookup and maintenance of the catalog tree.
//!
//! Categories form a two-level tree (top-level entries with optional
//! subcategories), each node pointing at exactly one concrete product
//! table. Subcategories are free to target a different product kind than
//! their parent; the catalog query builder relies on that to produce
//! mixed-kind listings.

use crate::{
    config::catalog::CategoryConfig,
    entities::{Category, category, enums::ProductKind},
    errors::{Error, Result},
};
use sea_orm::{
    QueryOrder, Set,
    prelude::*,
    sea_query::{Expr, Func},
};
use tracing::info;

/// Finds a category by case-insensitive name match, returning None if absent.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<category::Model>> {
    Category::find()
        .filter(
            Expr::expr(Func::lower(Expr::col((
                category::Entity,
                category::Column::Name,
            ))))
            .eq(name.to_lowercase()),
        )
        .one(db)
        .await
        .map_err(Into::into)
}

/// Like [`get_category_by_name`], but absence is a user-facing error.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] if no category matches the name.
pub async fn require_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<category::Model> {
    get_category_by_name(db, name)
        .await?
        .ok_or_else(|| Error::CategoryNotFound {
            name: name.to_string(),
        })
}

/// Retrieves the direct subcategories of a category, ordered by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn subcategories(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Vec<category::Model>> {
    Category::find()
        .filter(category::Column::ParentId.eq(category_id))
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// A top-level catalog entry together with its subcategories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    /// The top-level category
    pub category: category::Model,
    /// Its direct subcategories, ordered by name
    pub subcategories: Vec<category::Model>,
}

/// Builds the full catalog tree: top-level categories with their
/// subcategories, both levels ordered by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn catalog_tree(db: &DatabaseConnection) -> Result<Vec<CategoryNode>> {
    let roots = Category::find()
        .filter(category::Column::ParentId.is_null())
        .order_by_asc(category::Column::Name)
        .all(db)
        .await?;

    let mut nodes = Vec::with_capacity(roots.len());
    for root in roots {
        let subs = subcategories(db, root.id).await?;
        nodes.push(CategoryNode {
            category: root,
            subcategories: subs,
        });
    }
    Ok(nodes)
}

/// Creates a new category, optionally under a parent.
///
/// The parent may target a different product kind; cross-kind subcategories
/// are what allow a top-level "Electronics" entry to hold both TV and
/// smartphone subcategories.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The parent id does not reference an existing category
/// - The database insert fails (e.g. duplicate name)
pub async fn create_category(
    db: &DatabaseConnection,
    name: String,
    product_kind: ProductKind,
    parent_id: Option<i64>,
) -> Result<category::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Category name cannot be empty".to_string(),
        });
    }

    if let Some(parent) = parent_id {
        Category::find_by_id(parent)
            .one(db)
            .await?
            .ok_or_else(|| Error::CategoryNotFound {
                name: parent.to_string(),
            })?;
    }

    let category = category::ActiveModel {
        name: Set(name.trim().to_string()),
        parent_id: Set(parent_id),
        product_kind: Set(product_kind),
        ..Default::default()
    };
    category.insert(db).await.map_err(Into::into)
}

/// Seeds the catalog from configuration entries, creating any category that
/// does not exist yet. Parents are resolved by name, so entries must list
/// parents before their children. Existing categories are left untouched,
/// making the seed idempotent.
///
/// # Errors
/// Returns an error if a parent name cannot be resolved or a write fails.
pub async fn seed_catalog(db: &DatabaseConnection, entries: &[CategoryConfig]) -> Result<usize> {
    let mut created = 0;
    for entry in entries {
        if get_category_by_name(db, &entry.name).await?.is_some() {
            continue;
        }

        let parent_id = match &entry.parent {
            Some(parent_name) => Some(require_category_by_name(db, parent_name).await?.id),
            None => None,
        };

        create_category(db, entry.name.clone(), entry.kind, parent_id).await?;
        created += 1;
    }

    if created > 0 {
        info!(created, "seeded catalog categories");
    }
    Ok(created)
}
