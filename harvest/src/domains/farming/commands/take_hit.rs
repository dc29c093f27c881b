use log::{debug, info};

use crate::farming::Farming::{ItemDropped, SourceEmptied, SourceHit};
use crate::farming::{Farming, FarmingDomain, FarmingError, SourceId};

impl FarmingDomain {
    /// One strike against a source. Striking an empty source changes nothing.
    pub fn take_hit(
        &mut self,
        id: SourceId,
    ) -> Result<impl FnOnce() -> Vec<Farming> + '_, FarmingError> {
        let source = self.get_source_mut(id)?;
        let command = move || {
            if source.health == 0 {
                return vec![];
            }
            source.health -= 1;
            debug!("Source {:?} hit, health {}", id, source.health);
            let mut events = vec![SourceHit {
                source: id,
                health: source.health,
            }];
            for _ in 0..source.kind.drop_count {
                events.push(ItemDropped {
                    source: id,
                    item: source.kind.item,
                });
            }
            if source.health == 0 {
                source.empty = true;
                info!("Source {:?} {} is empty", id, source.kind.name);
                events.push(SourceEmptied { source: id });
            }
            events
        };
        Ok(command)
    }
}
