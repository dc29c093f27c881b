use crate::acting::ActorId;
use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub(crate) fn move_actor(
        &mut self,
        actor: ActorId,
        input: [f32; 2],
    ) -> Result<Vec<Event>, ActionError> {
        let was_moving = self.acting.get_actor(actor)?.is_moving();
        let change_movement = self.acting.change_movement(actor, input)?;
        let mut events: Vec<Event> = occur![change_movement()];
        let state = self.acting.get_actor(actor)?;
        let moving = state.is_moving();
        if !was_moving && moving {
            for target in state.nearby.stop_conditioned() {
                events.extend(self.stop_interact(actor, target)?);
            }
        }
        if was_moving && !moving {
            events.extend(self.retry_interact(actor)?);
        }
        Ok(events)
    }
}
