//! Medical equipment order data model.

mod types;

pub use types::*;
