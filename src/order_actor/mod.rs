//! Order records and the errors order placement can produce.

pub mod entity;
pub mod error;

pub use error::*;
