use serde::{Deserialize, Serialize};

use crate::acting::{Acting, ActingError, ActorId};
use crate::collections::DictionaryError;
use crate::dropping::{Dropping, DroppingError};
use crate::farming::{Farming, FarmingError};
use crate::interaction::Target;
use crate::inventory::{Inventory, InventoryError};
use crate::working::{Working, WorkingError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Joystick input, zero vector stops the actor.
    MoveActor { actor: ActorId, input: [f32; 2] },
    EnterProximity { actor: ActorId, target: Target },
    LeaveProximity { actor: ActorId, target: Target },
    RetryInteract { actor: ActorId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Inventory(Vec<Inventory>),
    Farming(Vec<Farming>),
    Working(Vec<Working>),
    Acting(Vec<Acting>),
    Dropping(Vec<Dropping>),
}

impl From<Vec<Inventory>> for Event {
    fn from(events: Vec<Inventory>) -> Self {
        Self::Inventory(events)
    }
}

impl From<Vec<Farming>> for Event {
    fn from(events: Vec<Farming>) -> Self {
        Self::Farming(events)
    }
}

impl From<Vec<Working>> for Event {
    fn from(events: Vec<Working>) -> Self {
        Self::Working(events)
    }
}

impl From<Vec<Acting>> for Event {
    fn from(events: Vec<Acting>) -> Self {
        Self::Acting(events)
    }
}

impl From<Vec<Dropping>> for Event {
    fn from(events: Vec<Dropping>) -> Self {
        Self::Dropping(events)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionError {
    Inventory(InventoryError),
    Farming(FarmingError),
    Working(WorkingError),
    Acting(ActingError),
    Dropping(DroppingError),
    Inconsistency(DictionaryError),
}

impl From<InventoryError> for ActionError {
    fn from(error: InventoryError) -> Self {
        Self::Inventory(error)
    }
}

impl From<FarmingError> for ActionError {
    fn from(error: FarmingError) -> Self {
        Self::Farming(error)
    }
}

impl From<WorkingError> for ActionError {
    fn from(error: WorkingError) -> Self {
        Self::Working(error)
    }
}

impl From<ActingError> for ActionError {
    fn from(error: ActingError) -> Self {
        Self::Acting(error)
    }
}

impl From<DroppingError> for ActionError {
    fn from(error: DroppingError) -> Self {
        Self::Dropping(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}
