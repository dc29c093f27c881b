pub use commands::*;
pub use domain::*;

mod commands;
mod domain;
mod loading;
mod queries;
mod update;
