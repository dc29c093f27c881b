use serde::{Deserialize, Serialize};

use crate::collections::{Sequence, Shared};
use crate::inventory::ItemKey;
use crate::math::Position;

#[derive(Default)]
pub struct WorkingDomain {
    pub factories_id: Sequence,
    pub factories: Vec<Factory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactoryKey(pub usize);

#[derive(Debug)]
pub struct FactoryKind {
    pub id: FactoryKey,
    pub name: String,
    pub input: ItemKey,
    pub input_quantity: u32,
    pub output: ItemKey,
    pub output_quantity: u32,
    pub craft_time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FactoryId(pub usize);

#[derive(Debug)]
pub struct Factory {
    pub id: FactoryId,
    pub kind: Shared<FactoryKind>,
    pub position: Position,
    /// Accepted input units of the current craft cycle.
    pub stored: u32,
    /// Input units flying to the factory.
    pub incoming: u32,
    pub producing: bool,
    pub progress: f32,
}

impl Factory {
    /// Rejects input while producing or when in-flight units already complete the cycle.
    #[inline]
    pub fn can_interact(&self) -> bool {
        !self.producing && self.stored + self.incoming < self.kind.input_quantity
    }

    pub(crate) fn accumulate(&mut self) -> Vec<Working> {
        self.stored += 1;
        let mut events = vec![Working::InputDelivered {
            factory: self.id,
            stored: self.stored,
        }];
        if self.stored >= self.kind.input_quantity {
            self.stored -= self.kind.input_quantity;
            self.producing = true;
            self.progress = 0.0;
            events.push(Working::ProductionStarted { factory: self.id });
        }
        events
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Working {
    ReceivingStarted {
        factory: FactoryId,
        incoming: u32,
    },
    InputDelivered {
        factory: FactoryId,
        stored: u32,
    },
    ProductionStarted {
        factory: FactoryId,
    },
    ProductionCompleted {
        factory: FactoryId,
        item: ItemKey,
        quantity: u32,
    },
    OutputDelivered {
        factory: FactoryId,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkingError {
    FactoryNotFound { id: FactoryId },
}
