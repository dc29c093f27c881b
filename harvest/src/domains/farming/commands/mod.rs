pub use animate_source::*;
pub use complete_drop::*;
pub use recover_source::*;
pub use schedule_recovery::*;
pub use take_hit::*;

mod animate_source;
mod complete_drop;
mod recover_source;
mod schedule_recovery;
mod take_hit;
