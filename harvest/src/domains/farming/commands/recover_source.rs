use log::info;

use crate::farming::Farming::SourceRecovered;
use crate::farming::{Farming, FarmingDomain, FarmingError, SourceId};

impl FarmingDomain {
    pub fn recover_source(
        &mut self,
        id: SourceId,
    ) -> Result<impl FnOnce() -> Vec<Farming> + '_, FarmingError> {
        let source = self.get_source_mut(id)?;
        let command = move || {
            if !source.empty {
                return vec![];
            }
            source.health = source.kind.max_hits;
            source.empty = false;
            info!("Source {:?} {} recovered", id, source.kind.name);
            vec![SourceRecovered { source: id }]
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::Shared;
    use crate::farming::Farming::SourceRecovered;
    use crate::farming::{FarmingDomain, SourceId, SourceKey, SourceKind};
    use crate::inventory::ItemKey;

    #[test]
    fn test_recovery_restores_max_health() {
        let kind = Shared::new(SourceKind {
            id: SourceKey(1),
            name: "bush".to_string(),
            item: ItemKey(1),
            max_hits: 3,
            drop_count: 1,
            strike_period: 0.5,
            recovery_time: 5.0,
        });
        let mut domain = FarmingDomain::default();
        domain.load_source(SourceId(7), kind, [0.0, 0.0, 0.0]);
        for _ in 0..3 {
            domain.take_hit(SourceId(7)).unwrap()();
        }
        let recover = domain.recover_source(SourceId(7)).unwrap();
        assert_eq!(recover(), vec![SourceRecovered { source: SourceId(7) }]);
        let source = domain.get_source(SourceId(7)).unwrap();
        assert_eq!(source.health, 3);
        assert!(!source.empty);

        let recover = domain.recover_source(SourceId(7)).unwrap();
        assert_eq!(recover(), vec![]);
    }
}
