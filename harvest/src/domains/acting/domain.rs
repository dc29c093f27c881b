use serde::{Deserialize, Serialize};

use crate::collections::Sequence;
use crate::farming::SourceId;
use crate::interaction::InteractionRegistry;
use crate::math::Position;
use crate::timing::TweenId;
use crate::working::FactoryId;

#[derive(Default)]
pub struct ActingDomain {
    pub actors_id: Sequence,
    pub actors: Vec<Actor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    Idle,
    Moving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Idle,
    Farming { source: SourceId },
    Crafting { factory: FactoryId },
}

#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub position: Position,
    pub destination: Position,
    /// Horizontal look direction `[x, z]`.
    pub facing: [f32; 2],
    pub movement: Movement,
    pub activity: Activity,
    /// Periodic strike or delivery loop of the current activity.
    pub routine: Option<TweenId>,
    pub swing: f32,
    pub backpack: f32,
    pub nearby: InteractionRegistry,
}

impl Actor {
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.movement == Movement::Moving
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Acting {
    MovementChanged {
        actor: ActorId,
        movement: Movement,
    },
    ActivityChanged {
        actor: ActorId,
        activity: Activity,
    },
    ActorMoved {
        actor: ActorId,
        position: Position,
        facing: [f32; 2],
    },
    SwingChanged {
        actor: ActorId,
        swing: f32,
    },
    BackpackChanged {
        actor: ActorId,
        fullness: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActingError {
    ActorNotFound { id: ActorId },
}

impl ActingDomain {
    pub fn get_actor(&self, id: ActorId) -> Result<&Actor, ActingError> {
        self.actors
            .iter()
            .find(|actor| actor.id == id)
            .ok_or(ActingError::ActorNotFound { id })
    }

    pub fn get_actor_mut(&mut self, id: ActorId) -> Result<&mut Actor, ActingError> {
        self.actors
            .iter_mut()
            .find(|actor| actor.id == id)
            .ok_or(ActingError::ActorNotFound { id })
    }

    pub fn find_by_routine(&self, tween: TweenId) -> Option<ActorId> {
        self.actors
            .iter()
            .find(|actor| actor.routine == Some(tween))
            .map(|actor| actor.id)
    }

    pub fn find_farmers(&self, source: SourceId) -> Vec<ActorId> {
        self.actors
            .iter()
            .filter(|actor| actor.activity == Activity::Farming { source })
            .map(|actor| actor.id)
            .collect()
    }
}
