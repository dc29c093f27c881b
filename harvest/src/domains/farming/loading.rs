use crate::collections::Shared;
use crate::farming::{FarmingDomain, Source, SourceId, SourceKind};
use crate::math::Position;

impl FarmingDomain {
    pub fn load_source(&mut self, id: SourceId, kind: Shared<SourceKind>, position: Position) {
        self.sources_id.register(id.0);
        self.sources.push(Source {
            id,
            health: kind.max_hits,
            empty: kind.max_hits == 0,
            kind,
            position,
            scale: 1.0,
            animation: None,
        });
    }
}
