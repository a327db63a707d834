//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod account;
pub mod cart;
pub mod category;
pub mod clothing_product;
pub mod enums;
pub mod food_product;
pub mod rate;
pub mod shipping_address;
pub mod smartphone_product;
pub mod specification;
pub mod tv_product;

// Re-export specific types to avoid conflicts
pub use account::{Column as AccountColumn, Entity as Account, Model as AccountModel};
pub use cart::{Column as CartColumn, Entity as Cart, Model as CartModel};
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use clothing_product::{
    Column as ClothingProductColumn, Entity as ClothingProduct, Model as ClothingProductModel,
};
pub use food_product::{
    Column as FoodProductColumn, Entity as FoodProduct, Model as FoodProductModel,
};
pub use rate::{Column as RateColumn, Entity as Rate, Model as RateModel};
pub use shipping_address::{
    Column as ShippingAddressColumn, Entity as ShippingAddress, Model as ShippingAddressModel,
};
pub use smartphone_product::{
    Column as SmartphoneProductColumn, Entity as SmartphoneProduct,
    Model as SmartphoneProductModel,
};
pub use specification::{
    Column as SpecificationColumn, Entity as Specification, Model as SpecificationModel,
};
pub use tv_product::{Column as TvProductColumn, Entity as TvProduct, Model as TvProductModel};
