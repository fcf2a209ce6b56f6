//! Core types for storefront
//!
//! This crate contains domain types shared across all other crates.

mod customer;
mod order;
mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
