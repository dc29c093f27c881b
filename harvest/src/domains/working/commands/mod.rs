pub use receiving::*;
pub use sending::*;

mod receiving;
mod sending;
