use log::info;

use crate::working::Working::ProductionCompleted;
use crate::working::{Working, WorkingDomain};

impl WorkingDomain {
    pub fn update(&mut self, time: f32) -> Vec<Working> {
        let mut events = vec![];
        for factory in self.factories.iter_mut() {
            if !factory.producing {
                continue;
            }
            factory.progress += time;
            if factory.progress >= factory.kind.craft_time {
                factory.progress = 0.0;
                factory.producing = false;
                info!(
                    "Factory {:?} {} crafted {} of {:?}",
                    factory.id,
                    factory.kind.name,
                    factory.kind.output_quantity,
                    factory.kind.output
                );
                events.push(ProductionCompleted {
                    factory: factory.id,
                    item: factory.kind.output,
                    quantity: factory.kind.output_quantity,
                });
            }
        }
        events
    }
}
