use crate::acting::Acting::MovementChanged;
use crate::acting::{Acting, ActingDomain, ActingError, ActorId, Movement};
use crate::math::VectorMath;

impl ActingDomain {
    /// Applies joystick input, zero input stops the actor where it stands.
    pub fn change_movement(
        &mut self,
        id: ActorId,
        input: [f32; 2],
    ) -> Result<impl FnOnce() -> Vec<Acting> + '_, ActingError> {
        let actor = self.get_actor_mut(id)?;
        let command = move || {
            let mut events = vec![];
            if input.is_zero() {
                actor.destination = actor.position;
                if actor.movement == Movement::Moving {
                    actor.movement = Movement::Idle;
                    events.push(MovementChanged {
                        actor: id,
                        movement: actor.movement,
                    });
                }
            } else {
                if actor.movement == Movement::Idle {
                    actor.movement = Movement::Moving;
                    events.push(MovementChanged {
                        actor: id,
                        movement: actor.movement,
                    });
                }
                actor.facing = input.normalize();
                actor.destination = actor.position.add([input[0], 0.0, input[1]]);
            }
            events
        };
        Ok(command)
    }
}
