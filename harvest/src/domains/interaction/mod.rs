pub use registry::*;

mod registry;
