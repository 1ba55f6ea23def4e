pub mod category;
pub mod incident;
pub mod product;
pub mod promo;
pub mod subcategory;
