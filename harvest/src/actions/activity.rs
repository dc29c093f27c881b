use log::{debug, info};

use crate::acting::{Activity, ActorId};
use crate::actions::HIT_SQUASH;
use crate::api::{ActionError, Event};
use crate::dropping::{Receiver, Sender};
use crate::farming::{Farming, SourceId};
use crate::timing::Timing::{self, TweenCompleted, TweenUpdated};
use crate::timing::TweenId;
use crate::working::FactoryId;
use crate::{occur, Game};

impl Game {
    pub(crate) fn start_farm(
        &mut self,
        actor: ActorId,
        source: SourceId,
    ) -> Result<Vec<Event>, ActionError> {
        let strike_period = self.farming.get_source(source)?.kind.strike_period;
        let mut events: Vec<Event> = vec![];
        match self.acting.get_actor(actor)?.activity {
            Activity::Farming { .. } => return Ok(events),
            Activity::Crafting { .. } => events.extend(self.cancel_routine(actor)?),
            Activity::Idle => {}
        }
        info!("Actor {:?} starts farming {:?}", actor, source);
        let routine = self.timing.animate(0.0, 1.0, strike_period);
        events.extend(self.replace_routine(actor, Activity::Farming { source }, Some(routine))?);
        Ok(events)
    }

    /// Stops farming only when `source` is the farmed one.
    pub(crate) fn stop_farm(
        &mut self,
        actor: ActorId,
        source: SourceId,
    ) -> Result<Vec<Event>, ActionError> {
        if self.acting.get_actor(actor)?.activity != (Activity::Farming { source }) {
            return Ok(vec![]);
        }
        info!("Actor {:?} stops farming {:?}", actor, source);
        let mut events = self.cancel_routine(actor)?;
        events.extend(self.retry_interact(actor)?);
        Ok(events)
    }

    /// Delivers input right away and then once per delivery period.
    pub(crate) fn start_craft(
        &mut self,
        actor: ActorId,
        factory: FactoryId,
    ) -> Result<Vec<Event>, ActionError> {
        self.working.get_factory(factory)?;
        let mut events: Vec<Event> = vec![];
        match self.acting.get_actor(actor)?.activity {
            Activity::Crafting { .. } => return Ok(events),
            Activity::Farming { .. } => events.extend(self.cancel_routine(actor)?),
            Activity::Idle => {}
        }
        info!("Actor {:?} starts crafting at {:?}", actor, factory);
        let crafting = Activity::Crafting { factory };
        events.extend(self.replace_routine(actor, crafting, None)?);
        events.extend(self.deliver_to_factory(actor, factory)?);
        if self.acting.get_actor(actor)?.activity == crafting {
            let routine = self.timing.delay(self.known.settings.delivery_period);
            events.extend(self.replace_routine(actor, crafting, Some(routine))?);
        }
        Ok(events)
    }

    pub(crate) fn stop_craft(
        &mut self,
        actor: ActorId,
        factory: FactoryId,
    ) -> Result<Vec<Event>, ActionError> {
        if self.acting.get_actor(actor)?.activity != (Activity::Crafting { factory }) {
            return Ok(vec![]);
        }
        info!("Actor {:?} stops crafting at {:?}", actor, factory);
        let mut events = self.cancel_routine(actor)?;
        events.extend(self.retry_interact(actor)?);
        Ok(events)
    }

    /// One delivery of factory input from the ledger, aborted without changes if the ledger is short.
    pub(crate) fn deliver_to_factory(
        &mut self,
        actor: ActorId,
        factory: FactoryId,
    ) -> Result<Vec<Event>, ActionError> {
        let target = self.working.get_factory(factory)?;
        if !target.can_interact() {
            return Ok(vec![]);
        }
        let kind = self.known.items.get(target.kind.input)?;
        if !self.inventory.has_items(kind.id, 1) {
            info!("Not enough {} to deliver to {:?}", kind.name, factory);
            return self.stop_craft(actor, factory);
        }
        let position = self.acting.get_actor(actor)?.position;
        let origin = self.drop_origin(position);
        let reduce_items = self.inventory.reduce_items(kind.id, 1)?;
        let start_receiving = self.working.start_receiving(factory)?;
        let (transit, start_transit) = self.dropping.start_transit(
            &kind,
            1,
            Sender::Actor(actor),
            Some(Receiver::Factory(factory)),
            origin,
            self.known.settings.flight_time,
        );
        let inventory = reduce_items();
        let mut events: Vec<Event> = occur![start_receiving(), start_transit()];
        self.begin_transit(transit)?;
        events.extend(self.fill_backpacks(&inventory)?);
        events.insert(0, inventory.into());
        Ok(events)
    }

    /// Cancels the activity routine and resets the actor pose, no retry.
    pub(crate) fn cancel_routine(&mut self, actor: ActorId) -> Result<Vec<Event>, ActionError> {
        let mut events = self.replace_routine(actor, Activity::Idle, None)?;
        if self.acting.get_actor(actor)?.swing != 0.0 {
            events.push(self.acting.swing(actor, 0.0)?.into());
        }
        Ok(events)
    }

    fn replace_routine(
        &mut self,
        actor: ActorId,
        activity: Activity,
        routine: Option<TweenId>,
    ) -> Result<Vec<Event>, ActionError> {
        let (replaced, change_activity) = self.acting.change_activity(actor, activity, routine)?;
        let events = change_activity();
        if let Some(replaced) = replaced {
            if Some(replaced) != routine {
                self.timing.cancel(replaced);
            }
        }
        Ok(occur![events])
    }

    /// Advances the periodic loop of the actor activity.
    pub(crate) fn handle_routine(
        &mut self,
        actor: ActorId,
        timing: Timing,
    ) -> Result<Vec<Event>, ActionError> {
        let activity = self.acting.get_actor(actor)?.activity;
        let mut events: Vec<Event> = vec![];
        match (activity, timing) {
            (Activity::Farming { .. }, TweenUpdated { value, .. }) => {
                events.push(self.acting.swing(actor, value)?.into());
            }
            (Activity::Farming { source }, TweenCompleted { id, .. }) => {
                events.push(self.acting.swing(actor, 0.0)?.into());
                events.extend(self.strike(source)?);
                if self.acting.get_actor(actor)?.routine == Some(id) {
                    let period = self.farming.get_source(source)?.kind.strike_period;
                    let routine = self.timing.animate(0.0, 1.0, period);
                    events.extend(self.replace_routine(actor, activity, Some(routine))?);
                }
            }
            (Activity::Crafting { factory }, TweenCompleted { id, .. }) => {
                events.extend(self.deliver_to_factory(actor, factory)?);
                if self.acting.get_actor(actor)?.routine == Some(id) {
                    let routine = self.timing.delay(self.known.settings.delivery_period);
                    events.extend(self.replace_routine(actor, activity, Some(routine))?);
                }
            }
            _ => {}
        }
        Ok(events)
    }

    /// One strike of a farming actor against a source.
    pub(crate) fn strike(&mut self, source: SourceId) -> Result<Vec<Event>, ActionError> {
        let take_hit = self.farming.take_hit(source)?;
        let farming = take_hit();
        if farming.is_empty() {
            debug!("Strike on empty source {:?} ignored", source);
            return Ok(vec![]);
        }
        let mut events = self.play_source_pose(source, HIT_SQUASH)?;
        for event in farming.iter() {
            match *event {
                Farming::ItemDropped { source, item } => {
                    events.extend(self.drop_to_world(source, item)?);
                }
                Farming::SourceEmptied { source } => {
                    events.extend(self.empty_source(source)?);
                }
                _ => {}
            }
        }
        events.insert(0, farming.into());
        Ok(events)
    }

    fn empty_source(&mut self, source: SourceId) -> Result<Vec<Event>, ActionError> {
        let mut events: Vec<Event> = vec![];
        for actor in self.acting.find_farmers(source) {
            events.extend(self.stop_farm(actor, source)?);
        }
        let schedule_recovery = self.farming.schedule_recovery(source, self.timing.now)?;
        events.push(schedule_recovery().into());
        Ok(events)
    }
}
