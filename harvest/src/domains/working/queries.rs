use crate::working::{Factory, FactoryId, WorkingDomain, WorkingError};

impl WorkingDomain {
    pub fn get_factory(&self, id: FactoryId) -> Result<&Factory, WorkingError> {
        self.factories
            .iter()
            .find(|factory| factory.id == id)
            .ok_or(WorkingError::FactoryNotFound { id })
    }

    pub fn get_factory_mut(&mut self, id: FactoryId) -> Result<&mut Factory, WorkingError> {
        self.factories
            .iter_mut()
            .find(|factory| factory.id == id)
            .ok_or(WorkingError::FactoryNotFound { id })
    }
}
