//! Customer Types - Pure type definitions shared by the customer service
//!
//! This crate contains only plain data types and their serde wiring, with no
//! async runtime or web framework dependencies.

pub mod customer;
pub mod page;
pub mod user;

pub use customer::*;
pub use page::*;
pub use user::*;
