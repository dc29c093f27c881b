use log::error;

use crate::acting::ActorId;
use crate::api::{ActionError, Event};
use crate::data::backpack_fullness;
use crate::inventory::{Inventory, ItemKey};
use crate::Game;

impl Game {
    /// Credits the ledger and stores the new count right away.
    pub(crate) fn credit(&mut self, item: ItemKey, quantity: u32) -> Result<Vec<Event>, ActionError> {
        let (count, add_items) = self.inventory.add_items(item, quantity as i64)?;
        let inventory = add_items();
        if let Err(error) = self.save_item(item) {
            error!("Unable to save {:?} count {}, {:?}", item, count, error);
        }
        let mut events = self.fill_backpacks(&inventory)?;
        events.insert(0, inventory.into());
        Ok(events)
    }

    /// Mirrors counts of backpack items into actor backpack fullness.
    pub(crate) fn fill_backpacks(&mut self, inventory: &[Inventory]) -> Result<Vec<Event>, ActionError> {
        let mut events: Vec<Event> = vec![];
        for event in inventory {
            let (item, count) = match *event {
                Inventory::ItemsChanged { item, count } => (item, count),
            };
            let kind = self.known.items.get(item)?;
            if !kind.backpack {
                continue;
            }
            let fullness = backpack_fullness(&kind, count);
            let actors: Vec<ActorId> = self.acting.actors.iter().map(|actor| actor.id).collect();
            for actor in actors {
                events.push(self.acting.fill_backpack(actor, fullness)?.into());
            }
        }
        Ok(events)
    }
}
