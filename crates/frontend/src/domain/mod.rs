pub mod catalog;
pub mod incident;
pub mod promo;
pub mod subcategory;
