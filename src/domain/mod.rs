pub mod flower;
pub mod order;

pub use flower::*;
pub use order::*;
