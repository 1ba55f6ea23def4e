pub mod list;

pub use list::CatalogList;
