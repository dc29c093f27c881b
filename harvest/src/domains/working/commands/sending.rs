use crate::working::Working::OutputDelivered;
use crate::working::{FactoryId, Working, WorkingDomain, WorkingError};

impl WorkingDomain {
    pub fn complete_sending(&self, id: FactoryId) -> Result<Vec<Working>, WorkingError> {
        self.get_factory(id)?;
        Ok(vec![OutputDelivered { factory: id }])
    }
}
