pub use counts::*;
pub use storage::*;

mod counts;
mod storage;
