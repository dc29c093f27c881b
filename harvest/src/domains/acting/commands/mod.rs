pub use change_activity::*;
pub use change_movement::*;
pub use update_pose::*;

mod change_activity;
mod change_movement;
mod update_pose;
