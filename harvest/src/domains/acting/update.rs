use crate::acting::Acting::ActorMoved;
use crate::acting::{Acting, ActingDomain};
use crate::math::VectorMath;

impl ActingDomain {
    /// Moves actors toward their destinations with constant speed.
    pub fn update(&mut self, time: f32, speed: f32) -> Vec<Acting> {
        let mut events = vec![];
        for actor in self.actors.iter_mut() {
            let way = actor.destination.sub(actor.position);
            let distance = way.length();
            if distance == 0.0 {
                continue;
            }
            let step = speed * time;
            actor.position = if step >= distance {
                actor.destination
            } else {
                actor.position.add(way.mul(step / distance))
            };
            events.push(ActorMoved {
                actor: actor.id,
                position: actor.position,
                facing: actor.facing,
            });
        }
        events
    }
}
