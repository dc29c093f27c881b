pub use collision::*;
pub use curve::*;
pub use random::*;
pub use vector::*;

mod collision;
mod curve;
mod random;
mod vector;

/// World position, `y` is the vertical axis.
pub type Position = [f32; 3];
