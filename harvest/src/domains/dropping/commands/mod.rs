pub use complete_transit::*;
pub use pick_up::*;
pub use stages::*;
pub use start_transit::*;

mod complete_transit;
mod pick_up;
mod stages;
mod start_transit;
