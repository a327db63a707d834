//! Product business logic - The tagged union over the four product tables
//! and the registry that resolves generic references back into them.
//!
//! Specifications and rates attach to products through a `(kind, id)`
//! pair instead of a foreign key; the discriminator is the closed
//! [`ProductKind`] enum and every resolution is a direct match into the
//! concrete table, executed as independent per-kind queries and merged
//! in-process.

use crate::{
    entities::{
        Category, ClothingProduct, FoodProduct, SmartphoneProduct, TvProduct, category,
        clothing_product,
        enums::{ClothingSize, Gender, ProductKind, Unit},
        food_product, smartphone_product, tv_product,
    },
    errors::{Error, Result},
};
use sea_orm::{QuerySelect, Set, prelude::*};
use std::collections::{HashMap, HashSet};

/// A product resolved from any of the four concrete tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Product {
    /// A television
    Tv(tv_product::Model),
    /// A smartphone
    Smartphone(smartphone_product::Model),
    /// A clothing item
    Clothing(clothing_product::Model),
    /// A foodstuff
    Food(food_product::Model),
}

impl Product {
    /// Which concrete table this product lives in.
    #[must_use]
    pub const fn kind(&self) -> ProductKind {
        match self {
            Self::Tv(_) => ProductKind::Tv,
            Self::Smartphone(_) => ProductKind::Smartphone,
            Self::Clothing(_) => ProductKind::Clothing,
            Self::Food(_) => ProductKind::Food,
        }
    }

    /// The product's id within its table.
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Tv(m) => m.id,
            Self::Smartphone(m) => m.id,
            Self::Clothing(m) => m.id,
            Self::Food(m) => m.id,
        }
    }

    /// The product's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Tv(m) => &m.name,
            Self::Smartphone(m) => &m.name,
            Self::Clothing(m) => &m.name,
            Self::Food(m) => &m.name,
        }
    }

    /// Model or the main feature of the product.
    #[must_use]
    pub fn marking(&self) -> &str {
        match self {
            Self::Tv(m) => &m.marking,
            Self::Smartphone(m) => &m.marking,
            Self::Clothing(m) => &m.marking,
            Self::Food(m) => &m.marking,
        }
    }

    /// The category the product belongs to.
    #[must_use]
    pub const fn category_id(&self) -> i64 {
        match self {
            Self::Tv(m) => m.category_id,
            Self::Smartphone(m) => m.category_id,
            Self::Clothing(m) => m.category_id,
            Self::Food(m) => m.category_id,
        }
    }
}

/// Variant-specific fields for a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductDetails {
    /// Television characteristics
    Tv {
        /// Screen diagonal (e.g. "55\"")
        screen_diagonal: String,
        /// Screen resolution (e.g. "3840x2160")
        screen_resolution: String,
    },
    /// Smartphone characteristics
    Smartphone {
        /// RAM size
        ram: String,
        /// Storage size
        memory: String,
    },
    /// Clothing characteristics
    Clothing {
        /// Target audience
        gender: Gender,
        /// Size, None for one-size items
        size: Option<ClothingSize>,
    },
    /// Foodstuffs carry no extra fields
    Food,
}

impl ProductDetails {
    /// Which concrete table these details belong to.
    #[must_use]
    pub const fn kind(&self) -> ProductKind {
        match self {
            Self::Tv { .. } => ProductKind::Tv,
            Self::Smartphone { .. } => ProductKind::Smartphone,
            Self::Clothing { .. } => ProductKind::Clothing,
            Self::Food => ProductKind::Food,
        }
    }
}

/// Parameters for creating a product of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Name of the product
    pub name: String,
    /// Model or the main feature of the product
    pub marking: String,
    /// Path to the product image
    pub image: String,
    /// Free-text description
    pub description: String,
    /// Unit the product is sold in
    pub unit: Unit,
    /// Unit its weight or volume is measured in
    pub unit_for_weight_vol: Unit,
    /// The category the product belongs to
    pub category_id: i64,
    /// Variant-specific fields, which also pick the target table
    pub details: ProductDetails,
}

/// Creates a new product in the table picked by its details.
///
/// The target category's product kind must match the variant: a category
/// that holds TVs cannot accept a smartphone.
///
/// # Errors
/// Returns an error if:
/// - The name or marking is empty or whitespace-only
/// - The category does not exist
/// - The category targets a different product kind
/// - The database insert fails
pub async fn create_product(db: &DatabaseConnection, new: NewProduct) -> Result<Product> {
    if new.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }
    if new.marking.trim().is_empty() {
        return Err(Error::Config {
            message: "Product marking cannot be empty".to_string(),
        });
    }

    let category = Category::find_by_id(new.category_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::CategoryNotFound {
            name: new.category_id.to_string(),
        })?;

    let kind = new.details.kind();
    if category.product_kind != kind {
        return Err(Error::Config {
            message: format!(
                "Category '{}' holds {} products, cannot add a {}",
                category.name, category.product_kind, kind
            ),
        });
    }

    let today = chrono::Utc::now().date_naive();
    let name = new.name.trim().to_string();
    let marking = new.marking.trim().to_string();

    let product = match new.details {
        ProductDetails::Tv {
            screen_diagonal,
            screen_resolution,
        } => {
            let model = tv_product::ActiveModel {
                name: Set(name),
                marking: Set(marking),
                image: Set(new.image),
                description: Set(new.description),
                unit: Set(new.unit),
                unit_for_weight_vol: Set(new.unit_for_weight_vol),
                date_added: Set(today),
                category_id: Set(new.category_id),
                screen_diagonal: Set(screen_diagonal),
                screen_resolution: Set(screen_resolution),
                ..Default::default()
            };
            Product::Tv(model.insert(db).await?)
        }
        ProductDetails::Smartphone { ram, memory } => {
            let model = smartphone_product::ActiveModel {
                name: Set(name),
                marking: Set(marking),
                image: Set(new.image),
                description: Set(new.description),
                unit: Set(new.unit),
                unit_for_weight_vol: Set(new.unit_for_weight_vol),
                date_added: Set(today),
                category_id: Set(new.category_id),
                ram: Set(ram),
                memory: Set(memory),
                ..Default::default()
            };
            Product::Smartphone(model.insert(db).await?)
        }
        ProductDetails::Clothing { gender, size } => {
            let model = clothing_product::ActiveModel {
                name: Set(name),
                marking: Set(marking),
                image: Set(new.image),
                description: Set(new.description),
                unit: Set(new.unit),
                unit_for_weight_vol: Set(new.unit_for_weight_vol),
                date_added: Set(today),
                category_id: Set(new.category_id),
                gender: Set(gender),
                size: Set(size),
                ..Default::default()
            };
            Product::Clothing(model.insert(db).await?)
        }
        ProductDetails::Food => {
            let model = food_product::ActiveModel {
                name: Set(name),
                marking: Set(marking),
                image: Set(new.image),
                description: Set(new.description),
                unit: Set(new.unit),
                unit_for_weight_vol: Set(new.unit_for_weight_vol),
                date_added: Set(today),
                category_id: Set(new.category_id),
                ..Default::default()
            };
            Product::Food(model.insert(db).await?)
        }
    };

    Ok(product)
}

/// Resolves a generic `(kind, id)` reference into its concrete table,
/// returning None if no row matches.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product(
    db: &DatabaseConnection,
    kind: ProductKind,
    id: i64,
) -> Result<Option<Product>> {
    let product = match kind {
        ProductKind::Tv => TvProduct::find_by_id(id).one(db).await?.map(Product::Tv),
        ProductKind::Smartphone => SmartphoneProduct::find_by_id(id)
            .one(db)
            .await?
            .map(Product::Smartphone),
        ProductKind::Clothing => ClothingProduct::find_by_id(id)
            .one(db)
            .await?
            .map(Product::Clothing),
        ProductKind::Food => FoodProduct::find_by_id(id)
            .one(db)
            .await?
            .map(Product::Food),
    };
    Ok(product)
}

/// Like [`get_product`], but a dangling reference is an error.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] if the reference does not resolve.
pub async fn require_product(
    db: &DatabaseConnection,
    kind: ProductKind,
    id: i64,
) -> Result<Product> {
    get_product(db, kind, id)
        .await?
        .ok_or(Error::ProductNotFound { kind, id })
}

/// Maps product ids of one kind to their `(category_id, category_name)`.
///
/// Stands in for a join from the specification table into the concrete
/// product table: ids that do not resolve to a product are simply absent
/// from the map, which downstream listing code treats as "drop the row".
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn product_categories(
    db: &DatabaseConnection,
    kind: ProductKind,
    ids: &[i64],
) -> Result<HashMap<i64, (i64, String)>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let pairs: Vec<(i64, i64)> = match kind {
        ProductKind::Tv => {
            TvProduct::find()
                .filter(tv_product::Column::Id.is_in(ids.iter().copied()))
                .select_only()
                .column(tv_product::Column::Id)
                .column(tv_product::Column::CategoryId)
                .into_tuple()
                .all(db)
                .await?
        }
        ProductKind::Smartphone => {
            SmartphoneProduct::find()
                .filter(smartphone_product::Column::Id.is_in(ids.iter().copied()))
                .select_only()
                .column(smartphone_product::Column::Id)
                .column(smartphone_product::Column::CategoryId)
                .into_tuple()
                .all(db)
                .await?
        }
        ProductKind::Clothing => {
            ClothingProduct::find()
                .filter(clothing_product::Column::Id.is_in(ids.iter().copied()))
                .select_only()
                .column(clothing_product::Column::Id)
                .column(clothing_product::Column::CategoryId)
                .into_tuple()
                .all(db)
                .await?
        }
        ProductKind::Food => {
            FoodProduct::find()
                .filter(food_product::Column::Id.is_in(ids.iter().copied()))
                .select_only()
                .column(food_product::Column::Id)
                .column(food_product::Column::CategoryId)
                .into_tuple()
                .all(db)
                .await?
        }
    };

    let category_ids: HashSet<i64> = pairs.iter().map(|(_, cid)| *cid).collect();
    let names: HashMap<i64, String> = Category::find()
        .filter(category::Column::Id.is_in(category_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    Ok(pairs
        .into_iter()
        .filter_map(|(id, cid)| names.get(&cid).map(|name| (id, (cid, name.clone()))))
        .collect())
}
