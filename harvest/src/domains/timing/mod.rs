pub use domain::*;

mod commands;
mod domain;
mod update;
