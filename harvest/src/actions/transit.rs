use log::debug;

use crate::acting::ActorId;
use crate::api::{ActionError, Event};
use crate::dropping::{Receiver, Sender, Stage, TokenId, TransitId};
use crate::farming::SourceId;
use crate::interaction::Target;
use crate::inventory::ItemKey;
use crate::math::{Position, VectorMath};
use crate::timing::Timing::{self, TweenCompleted, TweenUpdated};
use crate::timing::TweenId;
use crate::working::FactoryId;
use crate::{occur, Game};

/// Height above the sender the crafted batch flies to on its way to the inventory counter.
pub const COUNTER_LIFT: f32 = 3.0;

impl Game {
    /// Sender position raised by the drop height plus a random offset on every axis.
    pub(crate) fn drop_origin(&mut self, position: Position) -> Position {
        let range = self.known.settings.random_offset;
        let offset = [
            self.random.spread(range),
            self.known.settings.drop_height + self.random.spread(range),
            self.random.spread(range),
        ];
        position.add(offset)
    }

    pub(crate) fn drop_to_world(
        &mut self,
        source: SourceId,
        item: ItemKey,
    ) -> Result<Vec<Event>, ActionError> {
        let position = self.farming.get_source(source)?.position;
        let origin = self.drop_origin(position);
        let flight_time = self.known.settings.flight_time;
        self.send_item(item, 1, Sender::Source(source), None, origin, flight_time)
    }

    /// Flies a crafted batch from the factory to the inventory counter.
    pub(crate) fn send_output(
        &mut self,
        factory: FactoryId,
        item: ItemKey,
        quantity: u32,
    ) -> Result<Vec<Event>, ActionError> {
        let position = self.working.get_factory(factory)?.position;
        let origin = self.drop_origin(position);
        let flight_time = self.known.settings.output_flight_time;
        let sender = Sender::Factory(factory);
        self.send_item(item, quantity, sender, Some(Receiver::Counter), origin, flight_time)
    }

    fn send_item(
        &mut self,
        item: ItemKey,
        quantity: u32,
        sender: Sender,
        receiver: Option<Receiver>,
        origin: Position,
        flight_time: f32,
    ) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.get(item)?;
        let (transit, start_transit) =
            self.dropping
                .start_transit(&kind, quantity, sender, receiver, origin, flight_time);
        let events = occur![start_transit()];
        self.begin_transit(transit)?;
        Ok(events)
    }

    /// Scale-in is the first stage of every transit.
    pub(crate) fn begin_transit(&mut self, transit: TransitId) -> Result<(), ActionError> {
        let tween = self.timing.animate(0.0, 1.0, self.known.settings.scale_in_time);
        self.bind_transit(transit, tween)
    }

    fn launch(&mut self, transit: TransitId) -> Result<(), ActionError> {
        let flight_time = self.dropping.get_transit(transit)?.flight_time;
        let tween = self.timing.animate(0.0, 1.0, flight_time);
        self.bind_transit(transit, tween)
    }

    fn bind_transit(&mut self, transit: TransitId, tween: TweenId) -> Result<(), ActionError> {
        if let Some(replaced) = self.dropping.animate_transit(transit, tween)? {
            self.timing.cancel(replaced);
        }
        Ok(())
    }

    /// Collects an in-world token unless the ledger for its item is full.
    pub(crate) fn pick_up(&mut self, actor: ActorId, token: TokenId) -> Result<Vec<Event>, ActionError> {
        let state = self.dropping.get_token(token)?;
        if !state.can_interact() || self.inventory.is_at_max(state.item)? {
            return Ok(vec![]);
        }
        let (transit, pick_up) = self.dropping.pick_up(token, Receiver::Actor(actor))?;
        let events = occur![pick_up()];
        for actor in self.acting.actors.iter_mut() {
            actor.nearby.leave(Target::Item(token));
        }
        self.launch(transit)?;
        Ok(events)
    }

    fn receiver_position(&self, transit: TransitId) -> Result<Position, ActionError> {
        let transit = self.dropping.get_transit(transit)?;
        let position = match transit.receiver {
            Some(Receiver::Actor(actor)) => self.acting.get_actor(actor)?.position,
            Some(Receiver::Factory(factory)) => self.working.get_factory(factory)?.position,
            Some(Receiver::Counter) => transit.origin.add([0.0, COUNTER_LIFT, 0.0]),
            None => transit.origin,
        };
        Ok(position)
    }

    /// Drives transit stages: scale-in, hold, then flight or landing.
    pub(crate) fn handle_transit(
        &mut self,
        transit: TransitId,
        timing: Timing,
    ) -> Result<Vec<Event>, ActionError> {
        let stage = self.dropping.get_transit(transit)?.stage;
        let events = match (stage, timing) {
            (Stage::ScaleIn, TweenUpdated { value, .. }) => {
                occur![self.dropping.scale_token(transit, value)?]
            }
            (Stage::ScaleIn, TweenCompleted { .. }) => {
                let finish_scale_in = self.dropping.finish_scale_in(transit)?;
                let tween = self.timing.delay(self.known.settings.hold_time);
                self.bind_transit(transit, tween)?;
                occur![finish_scale_in]
            }
            (Stage::Hold, TweenCompleted { .. }) => {
                let finish_hold = self.dropping.finish_hold(transit)?;
                if self.dropping.get_transit(transit)?.stage == Stage::Flight {
                    self.launch(transit)?;
                }
                occur![finish_hold]
            }
            (Stage::Flight, TweenUpdated { value, .. }) => {
                let target = self.receiver_position(transit)?;
                occur![self.dropping.fly(transit, value, target)?]
            }
            (Stage::Flight, TweenCompleted { .. }) => {
                let target = self.receiver_position(transit)?;
                let mut events: Vec<Event> = occur![self.dropping.fly(transit, 1.0, target)?];
                events.extend(self.arrive(transit)?);
                events
            }
            _ => vec![],
        };
        Ok(events)
    }

    /// Hands over the carried units: ledger credit, factory accumulation, sender acknowledgement.
    fn arrive(&mut self, transit: TransitId) -> Result<Vec<Event>, ActionError> {
        let (completed, complete_transit) = self.dropping.complete_transit(transit)?;
        let mut events: Vec<Event> = occur![complete_transit()];
        debug!(
            "{} of {:?} arrived to {:?}",
            completed.quantity, completed.item, completed.receiver
        );
        match completed.receiver {
            Some(Receiver::Actor(_)) | Some(Receiver::Counter) => {
                events.extend(self.credit(completed.item, completed.quantity)?);
            }
            Some(Receiver::Factory(factory)) => {
                let complete_receiving = self.working.complete_receiving(factory)?;
                events.push(complete_receiving().into());
            }
            None => {}
        }
        match completed.sender {
            Sender::Source(source) => {
                events.push(self.farming.complete_drop(source)?.into());
            }
            Sender::Factory(factory) => {
                events.push(self.working.complete_sending(factory)?.into());
            }
            Sender::Actor(_) => {}
        }
        Ok(events)
    }
}
