use log::error;

use crate::acting::ActorId;
use crate::api::Event;
use crate::dropping::Token;
use crate::farming::Source;
use crate::interaction::Target;
use crate::math::{detect_overlaps, Collider, Position};
use crate::working::Factory;
use crate::Game;

impl Collider for Source {
    fn position(&self) -> Position {
        self.position
    }

    fn radius(&self) -> f32 {
        0.0
    }
}

impl Collider for Factory {
    fn position(&self) -> Position {
        self.position
    }

    fn radius(&self) -> f32 {
        0.0
    }
}

impl Collider for Token {
    fn position(&self) -> Position {
        self.position
    }

    fn radius(&self) -> f32 {
        0.0
    }
}

impl Game {
    /// Built-in proximity sensing, raises enter and leave notifications for every actor.
    pub(crate) fn sense_proximity(&mut self) -> Vec<Event> {
        let radius = match self.known.settings.trigger_radius {
            Some(radius) => radius,
            None => return vec![],
        };
        let actors: Vec<(ActorId, Position)> = self
            .acting
            .actors
            .iter()
            .map(|actor| (actor.id, actor.position))
            .collect();
        let mut events = vec![];
        for (actor, position) in actors {
            let mut overlaps: Vec<Target> = vec![];
            overlaps.extend(
                detect_overlaps(position, radius, &self.farming.sources)
                    .into_iter()
                    .map(|source| Target::Source(source.id)),
            );
            overlaps.extend(
                detect_overlaps(position, radius, &self.working.factories)
                    .into_iter()
                    .map(|factory| Target::Factory(factory.id)),
            );
            overlaps.extend(
                detect_overlaps(position, radius, self.dropping.landed_tokens())
                    .into_iter()
                    .map(|token| Target::Item(token.id)),
            );
            let tracked: Vec<Target> = match self.acting.get_actor(actor) {
                Ok(actor) => actor.nearby.iter().copied().collect(),
                Err(_) => continue,
            };
            for target in tracked.iter().filter(|target| !overlaps.contains(target)) {
                match self.leave_proximity(actor, *target) {
                    Ok(leave) => events.extend(leave),
                    Err(error) => error!("Unable to leave {:?}, {:?}", target, error),
                }
            }
            for target in overlaps.iter().filter(|target| !tracked.contains(target)) {
                match self.enter_proximity(actor, *target) {
                    Ok(enter) => events.extend(enter),
                    Err(error) => error!("Unable to enter {:?}, {:?}", target, error),
                }
            }
        }
        events
    }
}
