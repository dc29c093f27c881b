pub use add_items::*;
pub use reduce_items::*;

mod add_items;
mod reduce_items;
