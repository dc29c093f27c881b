use crate::collections::Shared;
use crate::math::Position;
use crate::working::{Factory, FactoryId, FactoryKind, WorkingDomain};

impl WorkingDomain {
    pub fn load_factory(&mut self, id: FactoryId, kind: Shared<FactoryKind>, position: Position) {
        self.factories_id.register(id.0);
        self.factories.push(Factory {
            id,
            kind,
            position,
            stored: 0,
            incoming: 0,
            producing: false,
            progress: 0.0,
        });
    }
}
