use log::debug;

use crate::dropping::Dropping::TransitStarted;
use crate::dropping::{Dropping, DroppingDomain, Receiver, Sender, Stage, Transit, TransitId};
use crate::inventory::ItemKind;
use crate::math::Position;

impl DroppingDomain {
    /// Starts moving `quantity` units of item, without receiver the token lands in world.
    pub fn start_transit<'operation>(
        &'operation mut self,
        kind: &ItemKind,
        quantity: u32,
        sender: Sender,
        receiver: Option<Receiver>,
        origin: Position,
        flight_time: f32,
    ) -> (TransitId, impl FnOnce() -> Vec<Dropping> + 'operation) {
        let id = self.transits_id.introduce().one(TransitId);
        let item = kind.id;
        let impulse = kind.physical_impulse;
        let command = move || {
            self.transits_id.register(id.0);
            let token = self.acquire(item, origin);
            debug!(
                "Transit {:?} of {:?} from {:?} to {:?} started",
                id, item, sender, receiver
            );
            self.transits.push(Transit {
                id,
                token,
                item,
                quantity,
                sender,
                receiver,
                stage: Stage::ScaleIn,
                origin,
                impulse,
                flight_time,
                animation: None,
            });
            vec![TransitStarted {
                transit: id,
                token,
                item,
                position: origin,
            }]
        };
        (id, command)
    }
}
