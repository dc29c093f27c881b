pub use commands::*;
pub use domain::*;
pub use recovery::*;

mod commands;
mod domain;
mod loading;
mod recovery;
mod update;
