pub mod acting;
pub mod dropping;
pub mod farming;
pub mod interaction;
pub mod inventory;
pub mod timing;
pub mod working;
