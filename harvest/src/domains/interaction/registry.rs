use serde::{Deserialize, Serialize};

use crate::dropping::TokenId;
use crate::farming::SourceId;
use crate::working::FactoryId;

/// World object an actor can engage with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Source(SourceId),
    Factory(FactoryId),
    Item(TokenId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    None,
    ActorStopped,
}

impl Target {
    #[inline]
    pub fn condition(&self) -> Condition {
        match self {
            Target::Source(_) => Condition::None,
            Target::Factory(_) => Condition::ActorStopped,
            Target::Item(_) => Condition::None,
        }
    }
}

/// Interactables currently in actor proximity.
///
/// Membership is a set, iteration follows entering order so that
/// arbitration between several eligible targets is deterministic.
#[derive(Debug, Default, Clone)]
pub struct InteractionRegistry {
    targets: Vec<Target>,
}

impl InteractionRegistry {
    /// Returns false if the target is already tracked.
    pub fn enter(&mut self, target: Target) -> bool {
        if self.contains(target) {
            return false;
        }
        self.targets.push(target);
        true
    }

    pub fn leave(&mut self, target: Target) -> bool {
        let count = self.targets.len();
        self.targets.retain(|tracked| *tracked != target);
        count != self.targets.len()
    }

    #[inline]
    pub fn contains(&self, target: Target) -> bool {
        self.targets.contains(&target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// First target in iteration order accepted by `eligible`.
    pub fn first_eligible<F>(&self, moving: bool, mut eligible: F) -> Option<Target>
    where
        F: FnMut(Target) -> bool,
    {
        self.targets
            .iter()
            .copied()
            .filter(|target| !(moving && target.condition() == Condition::ActorStopped))
            .find(|target| eligible(*target))
    }

    /// All tracked targets that require a stopped actor.
    pub fn stop_conditioned(&self) -> Vec<Target> {
        self.targets
            .iter()
            .copied()
            .filter(|target| target.condition() == Condition::ActorStopped)
            .collect()
    }
}
