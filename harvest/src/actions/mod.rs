pub(crate) use source_pose::{HIT_SQUASH, RECOVERY_POP};

mod activity;
mod interaction;
mod ledger;
mod movement;
mod sensing;
mod source_pose;
mod transit;
