//! Product catalog module.
//!
//! Contains the read-only product snapshot types the cart consumes.

mod category;
mod product;

pub use category::Category;
pub use product::{ComponentOption, Product};
