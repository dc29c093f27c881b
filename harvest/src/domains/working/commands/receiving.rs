use log::debug;

use crate::working::Working::ReceivingStarted;
use crate::working::{FactoryId, Working, WorkingDomain, WorkingError};

impl WorkingDomain {
    pub fn start_receiving(
        &mut self,
        id: FactoryId,
    ) -> Result<impl FnOnce() -> Vec<Working> + '_, WorkingError> {
        let factory = self.get_factory_mut(id)?;
        let command = move || {
            factory.incoming += 1;
            vec![ReceivingStarted {
                factory: id,
                incoming: factory.incoming,
            }]
        };
        Ok(command)
    }

    /// Settles one in-flight unit into the craft cycle.
    pub fn complete_receiving(
        &mut self,
        id: FactoryId,
    ) -> Result<impl FnOnce() -> Vec<Working> + '_, WorkingError> {
        let factory = self.get_factory_mut(id)?;
        let command = move || {
            debug!("Factory {:?} received {:?}", id, factory.kind.input);
            factory.incoming = factory.incoming.saturating_sub(1);
            factory.accumulate()
        };
        Ok(command)
    }
}
