use log::debug;

use crate::dropping::Dropping::TransitCompleted;
use crate::dropping::{Dropping, DroppingDomain, DroppingError, Transit, TransitId};

impl DroppingDomain {
    /// Releases the token back to its pool and hands the finished transit to the caller.
    pub fn complete_transit(
        &mut self,
        id: TransitId,
    ) -> Result<(Transit, impl FnOnce() -> Vec<Dropping> + '_), DroppingError> {
        let transit = self.get_transit(id)?.clone();
        let completed = transit.clone();
        let command = move || {
            self.transits.retain(|transit| transit.id != id);
            self.release(transit.token);
            debug!("Transit {:?} of {:?} completed", id, transit.item);
            vec![TransitCompleted {
                transit: id,
                token: transit.token,
                item: transit.item,
                quantity: transit.quantity,
            }]
        };
        Ok((completed, command))
    }
}
