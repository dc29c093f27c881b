use datamap::Storage;
pub use domains::*;

use crate::acting::ActingDomain;
use crate::api::{Action, ActionError, Event};
use crate::dropping::DroppingDomain;
use crate::farming::FarmingDomain;
use crate::inventory::{InventoryDomain, TransactionReactor};
use crate::math::Random;
use crate::model::Knowledge;
use crate::timing::TimingDomain;
use crate::working::WorkingDomain;

pub use data::DataError;

mod actions;
pub mod api;
pub mod collections;
mod data;
mod domains;
pub mod math;
pub mod model;
mod update;

pub struct Game {
    pub known: Knowledge,
    pub inventory: InventoryDomain,
    pub farming: FarmingDomain,
    pub working: WorkingDomain,
    pub acting: ActingDomain,
    pub dropping: DroppingDomain,
    pub timing: TimingDomain,
    random: Random,
    storage: Storage,
}

impl Game {
    pub fn new(storage: Storage) -> Self {
        Self {
            known: Knowledge::default(),
            inventory: InventoryDomain::default(),
            farming: FarmingDomain::default(),
            working: WorkingDomain::default(),
            acting: ActingDomain::default(),
            dropping: DroppingDomain::default(),
            timing: TimingDomain::default(),
            random: Random::new(),
            storage,
        }
    }

    /// Makes drop offsets reproducible.
    pub fn seed(&mut self, seed: u64) {
        self.random = Random::seeded(seed);
    }

    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn register_reactor(&mut self, reactor: Box<dyn TransactionReactor>) {
        self.inventory.register_reactor(reactor);
    }

    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        match action {
            Action::MoveActor { actor, input } => self.move_actor(actor, input),
            Action::EnterProximity { actor, target } => self.enter_proximity(actor, target),
            Action::LeaveProximity { actor, target } => self.leave_proximity(actor, target),
            Action::RetryInteract { actor } => self.retry_interact(actor),
        }
    }
}

#[macro_export]
macro_rules! occur {
    () => {
        vec![]
    };
    ($($domain:expr),+ $(,)?) => {
        vec![$($domain.into(),)+]
    };
}
