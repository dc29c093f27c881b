use crate::farming::Farming::DropCompleted;
use crate::farming::{Farming, FarmingDomain, FarmingError, SourceId};

impl FarmingDomain {
    /// Acknowledges that an item dropped by the source reached the inventory.
    pub fn complete_drop(&self, id: SourceId) -> Result<Vec<Farming>, FarmingError> {
        self.get_source(id)?;
        Ok(vec![DropCompleted { source: id }])
    }
}
