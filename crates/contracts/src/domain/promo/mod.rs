pub mod aggregate;

pub use aggregate::{PromoBanner, PromoBannerId};
