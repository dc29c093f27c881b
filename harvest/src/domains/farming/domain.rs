use serde::{Deserialize, Serialize};

use crate::collections::{Sequence, Shared};
use crate::farming::RecoveryScheduler;
use crate::inventory::ItemKey;
use crate::math::Position;
use crate::timing::TweenId;

#[derive(Default)]
pub struct FarmingDomain {
    pub sources_id: Sequence,
    pub sources: Vec<Source>,
    pub recovery: RecoveryScheduler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceKey(pub usize);

#[derive(Debug)]
pub struct SourceKind {
    pub id: SourceKey,
    pub name: String,
    pub item: ItemKey,
    pub max_hits: u32,
    pub drop_count: u32,
    pub strike_period: f32,
    pub recovery_time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceId(pub usize);

#[derive(Debug)]
pub struct Source {
    pub id: SourceId,
    pub kind: Shared<SourceKind>,
    pub position: Position,
    pub health: u32,
    pub empty: bool,
    /// Vertical scale of the source visual, 1 is the neutral pose.
    pub scale: f32,
    pub animation: Option<TweenId>,
}

impl Source {
    #[inline]
    pub fn can_interact(&self) -> bool {
        !self.empty
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Farming {
    SourceHit {
        source: SourceId,
        health: u32,
    },
    ItemDropped {
        source: SourceId,
        item: ItemKey,
    },
    SourceEmptied {
        source: SourceId,
    },
    RecoveryScheduled {
        source: SourceId,
        due: f32,
    },
    SourceRecovered {
        source: SourceId,
    },
    DropCompleted {
        source: SourceId,
    },
    SourceAnimated {
        source: SourceId,
        scale: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FarmingError {
    SourceNotFound { id: SourceId },
}

impl FarmingDomain {
    pub fn get_source(&self, id: SourceId) -> Result<&Source, FarmingError> {
        self.sources
            .iter()
            .find(|source| source.id == id)
            .ok_or(FarmingError::SourceNotFound { id })
    }

    pub fn get_source_mut(&mut self, id: SourceId) -> Result<&mut Source, FarmingError> {
        self.sources
            .iter_mut()
            .find(|source| source.id == id)
            .ok_or(FarmingError::SourceNotFound { id })
    }

    pub fn find_animated(&self, tween: TweenId) -> Option<SourceId> {
        self.sources
            .iter()
            .find(|source| source.animation == Some(tween))
            .map(|source| source.id)
    }
}
