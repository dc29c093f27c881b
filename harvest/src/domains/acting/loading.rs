use crate::acting::{Activity, Actor, ActingDomain, ActorId, Movement};
use crate::interaction::InteractionRegistry;
use crate::math::Position;

impl ActingDomain {
    pub fn load_actor(&mut self, id: ActorId, position: Position) {
        self.actors_id.register(id.0);
        self.actors.push(Actor {
            id,
            position,
            destination: position,
            facing: [0.0, 1.0],
            movement: Movement::Idle,
            activity: Activity::Idle,
            routine: None,
            swing: 0.0,
            backpack: 0.0,
            nearby: InteractionRegistry::default(),
        });
    }
}
