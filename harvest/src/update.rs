use log::{debug, error};

use crate::actions::RECOVERY_POP;
use crate::api::{ActionError, Event};
use crate::farming::Farming;
use crate::timing::Timing;
use crate::working::Working;
use crate::Game;

impl Game {
    /// Advances simulation time, errors of single steps are logged and skipped.
    pub fn update(&mut self, time: f32) -> Vec<Event> {
        let mut events: Vec<Event> = vec![];

        let acting = self.acting.update(time, self.known.settings.actor_speed);
        if !acting.is_empty() {
            events.push(acting.into());
        }
        events.extend(self.sense_proximity());

        let working = self.working.update(time);
        if !working.is_empty() {
            events.push(working.clone().into());
        }
        for event in working.iter() {
            if let Working::ProductionCompleted {
                factory,
                item,
                quantity,
            } = *event
            {
                match self.send_output(factory, item, quantity) {
                    Ok(send) => events.extend(send),
                    Err(error) => error!("Unable to send output of {:?}, {:?}", factory, error),
                }
            }
        }
        if !working.is_empty() {
            events.extend(self.retry_interact_all());
        }

        for timing in self.timing.update(time) {
            match self.handle_tween(timing) {
                Ok(tween) => events.extend(tween),
                Err(error) => error!("Unable to handle {:?}, {:?}", timing, error),
            }
        }

        let farming = self.farming.update(time, self.timing.now);
        if !farming.is_empty() {
            events.push(farming.clone().into());
        }
        for event in farming.iter() {
            if let Farming::SourceRecovered { source } = *event {
                match self.play_source_pose(source, RECOVERY_POP) {
                    Ok(pose) => events.extend(pose),
                    Err(error) => error!("Unable to animate {:?}, {:?}", source, error),
                }
            }
        }
        if !farming.is_empty() {
            events.extend(self.retry_interact_all());
        }
        events
    }

    /// Routes a tween to its owner, tweens of canceled owners are ignored.
    fn handle_tween(&mut self, timing: Timing) -> Result<Vec<Event>, ActionError> {
        let id = match timing {
            Timing::TweenUpdated { id, .. } => id,
            Timing::TweenCompleted { id, .. } => id,
        };
        if let Some(actor) = self.acting.find_by_routine(id) {
            return self.handle_routine(actor, timing);
        }
        if let Some(transit) = self.dropping.find_animated(id) {
            return self.handle_transit(transit, timing);
        }
        if let Some(source) = self.farming.find_animated(id) {
            return self.handle_source_pose(source, timing);
        }
        debug!("Tween {:?} has no owner", id);
        Ok(vec![])
    }
}
