use crate::farming::Farming::RecoveryScheduled;
use crate::farming::{Farming, FarmingDomain, FarmingError, SourceId};

impl FarmingDomain {
    pub fn schedule_recovery(
        &mut self,
        id: SourceId,
        now: f32,
    ) -> Result<impl FnOnce() -> Vec<Farming> + '_, FarmingError> {
        let source = self.get_source(id)?;
        let due = now + source.kind.recovery_time;
        let recovery = &mut self.recovery;
        let command = move || {
            if recovery.is_scheduled(id) {
                return vec![];
            }
            recovery.schedule(id, due);
            vec![RecoveryScheduled { source: id, due }]
        };
        Ok(command)
    }
}
