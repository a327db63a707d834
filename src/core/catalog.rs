//! Catalog query builder - Composes the storefront's read-path listings.
//!
//! Listings work on specifications, not products: the unit shown, carted,
//! and priced is the specification, annotated with its product's category
//! name and the product's average rating. Because products are a sum type
//! spread over four tables, a category spanning multiple kinds cannot be a
//! single portable query; each kind is fetched independently and merged
//! in-process, with unresolvable references dropped on the way.
//!
//! This module is a pure read path: no mutation, no transactions.

use crate::{
    core::{cart, category, product, rate},
    entities::{Specification, enums::ProductKind, rate as rate_entity, specification},
    errors::{Error, Result},
};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, QuerySelect, prelude::*};
use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
};

/// How many days a specification counts as a new arrival.
pub const NEW_ARRIVAL_WINDOW_DAYS: i64 = 14;

/// How many items the home listing shows.
pub const HOME_LISTING_ITEMS: u64 = 4;

/// One row of a catalog listing: a specification with its derived
/// annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// The in-stock specification
    pub specification: specification::Model,
    /// Id of the category the owning product belongs to
    pub category_id: i64,
    /// Name of that category, read back through the generic reference
    pub category_name: String,
    /// Average rating of the owning product, None when unrated
    pub rating: Option<f64>,
}

/// A single specification resolved for the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecificationDetail {
    /// The specification itself
    pub specification: specification::Model,
    /// The owning product, resolved through the generic reference
    pub product: product::Product,
    /// Average rating of the owning product, None when unrated
    pub rating: Option<f64>,
    /// All reviews for the owning product, newest first
    pub reviews: Vec<rate_entity::Model>,
}

/// Fetches all in-stock specifications of one product kind, in id order.
async fn in_stock_specs(
    db: &DatabaseConnection,
    kind: ProductKind,
) -> Result<Vec<specification::Model>> {
    Specification::find()
        .filter(specification::Column::ProductKind.eq(kind))
        .filter(specification::Column::AvailableQty.gt(Decimal::ZERO))
        .order_by_asc(specification::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Annotates specifications with their product's category and average
/// rating, preserving input order. Specifications whose generic reference
/// does not resolve to a product are dropped rather than listed without a
/// category.
async fn annotate(
    db: &DatabaseConnection,
    specs: Vec<specification::Model>,
) -> Result<Vec<CatalogItem>> {
    let mut ids_per_kind: HashMap<ProductKind, Vec<i64>> = HashMap::new();
    for spec in &specs {
        ids_per_kind
            .entry(spec.product_kind)
            .or_default()
            .push(spec.object_id);
    }

    let mut categories: HashMap<(ProductKind, i64), (i64, String)> = HashMap::new();
    let mut ratings: HashMap<(ProductKind, i64), f64> = HashMap::new();
    for (kind, ids) in &ids_per_kind {
        for (object_id, entry) in product::product_categories(db, *kind, ids).await? {
            categories.insert((*kind, object_id), entry);
        }
        for (object_id, rating) in rate::average_ratings(db, *kind, ids).await? {
            ratings.insert((*kind, object_id), rating);
        }
    }

    Ok(specs
        .into_iter()
        .filter_map(|spec| {
            let key = (spec.product_kind, spec.object_id);
            categories.get(&key).map(|(category_id, category_name)| CatalogItem {
                specification: spec,
                category_id: *category_id,
                category_name: category_name.clone(),
                rating: ratings.get(&key).copied(),
            })
        })
        .collect())
}

/// Fetches and annotates the items for a set of per-kind category scopes.
async fn scoped_items(
    db: &DatabaseConnection,
    scopes: Vec<(ProductKind, HashSet<i64>)>,
) -> Result<Vec<CatalogItem>> {
    let mut items = Vec::new();
    for (kind, category_ids) in scopes {
        let specs = in_stock_specs(db, kind).await?;
        let mut annotated = annotate(db, specs).await?;
        annotated.retain(|item| category_ids.contains(&item.category_id));
        items.extend(annotated);
    }
    Ok(items)
}

/// Builds the per-kind scopes for a category listing.
///
/// Without subcategories the scope is the category itself. With
/// subcategories, same-kind children extend the parent's scope while each
/// differently-kinded child contributes its own scope, producing the
/// heterogeneous union.
fn listing_scopes(
    root: &crate::entities::category::Model,
    subs: &[crate::entities::category::Model],
) -> Vec<(ProductKind, HashSet<i64>)> {
    let mut scopes: Vec<(ProductKind, HashSet<i64>)> =
        vec![(root.product_kind, HashSet::from([root.id]))];
    for sub in subs {
        match scopes.iter_mut().find(|(kind, _)| *kind == sub.product_kind) {
            Some((_, ids)) => {
                ids.insert(sub.id);
            }
            None => scopes.push((sub.product_kind, HashSet::from([sub.id]))),
        }
    }
    scopes
}

/// Lists the in-stock specifications of a category, resolved by
/// case-insensitive name.
///
/// A category without subcategories lists its own products. A category
/// with subcategories lists its whole subtree, spanning product kinds if
/// the children target different tables.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] for an unknown name, or a database
/// error.
pub async fn category_listing(db: &DatabaseConnection, name: &str) -> Result<Vec<CatalogItem>> {
    let root = category::require_category_by_name(db, name).await?;
    let subs = category::subcategories(db, root.id).await?;
    scoped_items(db, listing_scopes(&root, &subs)).await
}

/// Lists the in-stock specifications belonging directly to one
/// subcategory, resolved by case-insensitive name.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] for an unknown name, or a database
/// error.
pub async fn subcategory_listing(db: &DatabaseConnection, name: &str) -> Result<Vec<CatalogItem>> {
    let sub = category::require_category_by_name(db, name).await?;
    scoped_items(db, vec![(sub.product_kind, HashSet::from([sub.id]))]).await
}

/// New arrivals of a category: the listing restricted to specifications
/// added within the last [`NEW_ARRIVAL_WINDOW_DAYS`] days, newest first.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] for an unknown name, or a database
/// error.
pub async fn new_arrivals(db: &DatabaseConnection, name: &str) -> Result<Vec<CatalogItem>> {
    new_arrivals_as_of(db, name, chrono::Utc::now().date_naive()).await
}

/// [`new_arrivals`] with an explicit "today", the cutoff being
/// `today - NEW_ARRIVAL_WINDOW_DAYS`.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] for an unknown name, or a database
/// error.
pub async fn new_arrivals_as_of(
    db: &DatabaseConnection,
    name: &str,
    today: NaiveDate,
) -> Result<Vec<CatalogItem>> {
    let cutoff = today - Duration::days(NEW_ARRIVAL_WINDOW_DAYS);
    let mut items = category_listing(db, name).await?;
    items.retain(|item| item.specification.date_added >= cutoff);
    items.sort_by_key(|item| Reverse((item.specification.date_added, item.specification.id)));
    Ok(items)
}

/// Popular items of a category: the listing ordered by the number of
/// distinct customers that have the specification in their cart,
/// descending. Specifications in no cart rank last.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] for an unknown name, or a database
/// error.
pub async fn popular(db: &DatabaseConnection, name: &str) -> Result<Vec<CatalogItem>> {
    let mut items = category_listing(db, name).await?;
    let spec_ids: Vec<i64> = items.iter().map(|item| item.specification.id).collect();
    let counts = cart::distinct_customer_counts(db, &spec_ids).await?;

    items.sort_by_key(|item| {
        Reverse(counts.get(&item.specification.id).copied().unwrap_or(0))
    });
    Ok(items)
}

/// The home listing: the [`HOME_LISTING_ITEMS`] most recently added
/// in-stock specifications across the whole store.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn home_listing(db: &DatabaseConnection) -> Result<Vec<CatalogItem>> {
    let specs = Specification::find()
        .filter(specification::Column::AvailableQty.gt(Decimal::ZERO))
        .order_by_desc(specification::Column::Id)
        .limit(HOME_LISTING_ITEMS)
        .all(db)
        .await?;
    annotate(db, specs).await
}

/// Resolves a single specification for the detail page: the row itself,
/// its owning product, the product's average rating, and all reviews.
///
/// # Errors
/// Returns [`Error::SpecificationNotFound`] or [`Error::ProductNotFound`]
/// if either half of the lookup fails, or a database error.
pub async fn specification_detail(
    db: &DatabaseConnection,
    id: i64,
) -> Result<SpecificationDetail> {
    let spec = crate::core::specification::get_specification(db, id)
        .await?
        .ok_or(Error::SpecificationNotFound { id })?;

    let owner = product::require_product(db, spec.product_kind, spec.object_id).await?;
    let rating = rate::average_ratings(db, spec.product_kind, &[spec.object_id])
        .await?
        .get(&spec.object_id)
        .copied();
    let reviews = rate::rates_for(db, spec.product_kind, spec.object_id).await?;

    Ok(SpecificationDetail {
        specification: spec,
        product: owner,
        rating,
        reviews,
    })
}
