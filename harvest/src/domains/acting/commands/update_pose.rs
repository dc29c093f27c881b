use crate::acting::Acting::{BackpackChanged, SwingChanged};
use crate::acting::{Acting, ActingDomain, ActingError, ActorId};

impl ActingDomain {
    pub fn swing(&mut self, id: ActorId, swing: f32) -> Result<Vec<Acting>, ActingError> {
        let actor = self.get_actor_mut(id)?;
        actor.swing = swing;
        Ok(vec![SwingChanged { actor: id, swing }])
    }

    /// Sets backpack fullness in `[0, 1]`, zero hides the backpack.
    pub fn fill_backpack(&mut self, id: ActorId, fullness: f32) -> Result<Vec<Acting>, ActingError> {
        let actor = self.get_actor_mut(id)?;
        let fullness = fullness.max(0.0).min(1.0);
        if actor.backpack == fullness {
            return Ok(vec![]);
        }
        actor.backpack = fullness;
        Ok(vec![BackpackChanged {
            actor: id,
            fullness,
        }])
    }
}
