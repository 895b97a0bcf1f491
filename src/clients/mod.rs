//! Typed handles over the resource actors.

#[macro_use]
mod macros;
mod flower_client;
mod order_client;

pub use flower_client::*;
pub use order_client::*;
