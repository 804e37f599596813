//! Line chart aggregate: data, layout math and the single-chart slot.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
