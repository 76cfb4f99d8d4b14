//! Static design-token tables.
//!
//! Each submodule declares one category of tokens as a [`TokenTable`]
//! literal. Tables are independent of each other; [`crate::compose()`]
//! assembles them into the record the build tool reads.

pub mod border;
pub mod color;
pub mod shadow;
pub mod spacing;
mod table;
pub mod typography;
mod value;

pub use table::TokenTable;
pub use value::TokenValue;
