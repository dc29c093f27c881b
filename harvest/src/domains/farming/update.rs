use log::error;

use crate::farming::{Farming, FarmingDomain};

impl FarmingDomain {
    pub fn update(&mut self, time: f32, now: f32) -> Vec<Farming> {
        let mut events = vec![];
        for source in self.recovery.poll(time, now) {
            match self.recover_source(source) {
                Ok(recover) => events.extend(recover()),
                Err(error) => error!("Unable to recover source {:?}, {:?}", source, error),
            }
        }
        events
    }
}
