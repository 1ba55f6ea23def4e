pub mod aggregate;

pub use aggregate::{Subcategory, SubcategoryDto, SubcategoryId};
