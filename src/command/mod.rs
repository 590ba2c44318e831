mod list;
mod lookup;
mod render;

pub use list::{enums, operations, shapes};
pub use lookup::{enum_values, lookup};
pub use render::render;
