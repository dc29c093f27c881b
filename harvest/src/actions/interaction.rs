use log::{debug, error};

use crate::acting::ActorId;
use crate::api::{ActionError, Event};
use crate::interaction::{Condition, Target};
use crate::Game;

impl Game {
    pub(crate) fn enter_proximity(
        &mut self,
        actor: ActorId,
        target: Target,
    ) -> Result<Vec<Event>, ActionError> {
        if !self.acting.get_actor_mut(actor)?.nearby.enter(target) {
            return Ok(vec![]);
        }
        debug!("Actor {:?} near {:?}", actor, target);
        if target.condition() == Condition::None && self.can_interact(target)? {
            return self.interact(actor, target);
        }
        Ok(vec![])
    }

    /// Leaving always stops the target, even when the actor is not engaged with it.
    pub(crate) fn leave_proximity(
        &mut self,
        actor: ActorId,
        target: Target,
    ) -> Result<Vec<Event>, ActionError> {
        self.acting.get_actor_mut(actor)?.nearby.leave(target);
        debug!("Actor {:?} left {:?}", actor, target);
        self.stop_interact(actor, target)
    }

    /// Engages the first eligible target in proximity, if any.
    pub(crate) fn retry_interact(&mut self, actor: ActorId) -> Result<Vec<Event>, ActionError> {
        let state = self.acting.get_actor(actor)?;
        let candidate = state
            .nearby
            .first_eligible(state.is_moving(), |target| self.is_eligible(target));
        match candidate {
            Some(target) => self.interact(actor, target),
            None => Ok(vec![]),
        }
    }

    pub(crate) fn retry_interact_all(&mut self) -> Vec<Event> {
        let actors: Vec<ActorId> = self.acting.actors.iter().map(|actor| actor.id).collect();
        let mut events: Vec<Event> = vec![];
        for actor in actors {
            match self.retry_interact(actor) {
                Ok(retry) => events.extend(retry),
                Err(error) => error!("Unable to retry interaction of {:?}, {:?}", actor, error),
            }
        }
        events
    }

    pub(crate) fn interact(&mut self, actor: ActorId, target: Target) -> Result<Vec<Event>, ActionError> {
        match target {
            Target::Source(source) => self.start_farm(actor, source),
            Target::Factory(factory) => self.start_craft(actor, factory),
            Target::Item(token) => self.pick_up(actor, token),
        }
    }

    pub(crate) fn stop_interact(
        &mut self,
        actor: ActorId,
        target: Target,
    ) -> Result<Vec<Event>, ActionError> {
        match target {
            Target::Source(source) => self.stop_farm(actor, source),
            Target::Factory(factory) => self.stop_craft(actor, factory),
            Target::Item(_) => Ok(vec![]),
        }
    }

    pub(crate) fn can_interact(&self, target: Target) -> Result<bool, ActionError> {
        let can = match target {
            Target::Source(id) => self.farming.get_source(id)?.can_interact(),
            Target::Factory(id) => self.working.get_factory(id)?.can_interact(),
            Target::Item(id) => self.dropping.get_token(id)?.can_interact(),
        };
        Ok(can)
    }

    /// Target state plus the ledger: a factory needs its input, a token needs free capacity.
    fn is_eligible(&self, target: Target) -> bool {
        match self.check_eligible(target) {
            Ok(eligible) => eligible,
            Err(error) => {
                debug!("Unable to check {:?} eligibility, {:?}", target, error);
                false
            }
        }
    }

    fn check_eligible(&self, target: Target) -> Result<bool, ActionError> {
        let eligible = match target {
            Target::Source(id) => self.farming.get_source(id)?.can_interact(),
            Target::Factory(id) => {
                let factory = self.working.get_factory(id)?;
                factory.can_interact() && self.inventory.has_items(factory.kind.input, 1)
            }
            Target::Item(id) => {
                let token = self.dropping.get_token(id)?;
                token.can_interact() && !self.inventory.is_at_max(token.item)?
            }
        };
        Ok(eligible)
    }
}
