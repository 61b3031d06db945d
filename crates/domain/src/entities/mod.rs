//! Entities - objects with identity that outlives their attribute values

mod product;

pub use product::{Product, ProductId};
