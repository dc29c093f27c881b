use datamap::Entry;
use log::info;

use crate::acting::{Actor, ActorId};
use crate::collections::DictionaryError;
use crate::farming::{Source, SourceId, SourceKey, SourceKind};
use crate::inventory::{ItemKey, ItemKind};
use crate::math::Position;
use crate::model::Settings;
use crate::working::{Factory, FactoryId, FactoryKey, FactoryKind};
use crate::Game;

#[derive(Debug)]
pub enum DataError {
    Sql(rusqlite::Error),
    Json(serde_json::Error),
    Inconsistency(DictionaryError),
    SettingsNotFound,
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<rusqlite::Error> for DataError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

impl Game {
    pub fn load_game_knowledge(&mut self) -> Result<(), DataError> {
        info!("Begin game knowledge loading");
        for entry in self.storage.fetch_all::<ItemKind>()? {
            let kind = self.load_item_kind(&entry)?;
            self.known.items.insert(kind.id, kind.name.clone(), kind);
        }
        for entry in self.storage.fetch_all::<SourceKind>()? {
            let kind = self.load_source_kind(&entry)?;
            self.known.sources.insert(kind.id, kind.name.clone(), kind);
        }
        for entry in self.storage.fetch_all::<FactoryKind>()? {
            let kind = self.load_factory_kind(&entry)?;
            self.known.factories.insert(kind.id, kind.name.clone(), kind);
        }
        let entry = self
            .storage
            .fetch_all::<Settings>()?
            .into_iter()
            .next()
            .ok_or(DataError::SettingsNotFound)?;
        self.known.settings = self.load_settings(&entry)?;
        info!(
            "End game knowledge loading, {} items, {} sources, {} factories",
            self.known.items.len(),
            self.known.sources.len(),
            self.known.factories.len()
        );
        Ok(())
    }

    pub fn load_game_state(&mut self) -> Result<(), DataError> {
        info!("Begin game state loading");
        self.storage.setup_counts()?;
        for entry in self.storage.fetch_all::<Source>()? {
            let id = SourceId(entry.get("id")?);
            let kind = self.known.sources.find(entry.get_string("kind")?)?;
            let position: Position = entry.get("position")?;
            self.farming.load_source(id, kind, position);
        }
        for entry in self.storage.fetch_all::<Factory>()? {
            let id = FactoryId(entry.get("id")?);
            let kind = self.known.factories.find(entry.get_string("kind")?)?;
            let position: Position = entry.get("position")?;
            self.working.load_factory(id, kind, position);
        }
        for entry in self.storage.fetch_all::<Actor>()? {
            let id = ActorId(entry.get("id")?);
            let position: Position = entry.get("position")?;
            self.acting.load_actor(id, position);
        }
        let kinds: Vec<_> = self.known.items.iter().cloned().collect();
        for kind in kinds {
            let count = self.storage.get_item_count(&kind.name)?;
            self.inventory.load_stock(kind, count);
        }
        self.inventory.react_all();
        for kind in self.known.items.iter().filter(|kind| kind.backpack) {
            if let Ok(count) = self.inventory.get_count(kind.id) {
                let fullness = backpack_fullness(kind, count);
                for actor in self.acting.actors.iter_mut() {
                    actor.backpack = fullness;
                }
            }
        }
        info!(
            "End game state loading, {} sources, {} factories, {} actors",
            self.farming.sources.len(),
            self.working.factories.len(),
            self.acting.actors.len()
        );
        Ok(())
    }

    /// Writes all ledger counts in one transaction.
    pub fn save(&mut self) -> Result<(), DataError> {
        let counts: Vec<(String, u32)> = self
            .known
            .items
            .iter()
            .filter_map(|kind| {
                self.inventory
                    .get_count(kind.id)
                    .ok()
                    .map(|count| (kind.name.clone(), count))
            })
            .collect();
        self.storage
            .save_item_counts(counts.iter().map(|(item, count)| (item.as_str(), *count)))?;
        Ok(())
    }

    pub(crate) fn save_item(&mut self, item: ItemKey) -> Result<(), DataError> {
        let kind = self.known.items.get(item)?;
        let count = self.inventory.get_count(item).unwrap_or(0);
        self.storage.save_item_counts([(kind.name.as_str(), count)])?;
        Ok(())
    }

    pub(crate) fn load_item_kind(&self, entry: &Entry) -> Result<ItemKind, DataError> {
        let data = ItemKind {
            id: ItemKey(entry.get("id")?),
            name: entry.get("name")?,
            max_quantity: entry.get("max_quantity")?,
            physical_impulse: entry.get("physical_impulse")?,
            backpack: entry.get_bool("backpack")?,
        };
        Ok(data)
    }

    pub(crate) fn load_source_kind(&self, entry: &Entry) -> Result<SourceKind, DataError> {
        let data = SourceKind {
            id: SourceKey(entry.get("id")?),
            name: entry.get("name")?,
            item: self.known.items.find(entry.get_string("item")?)?.id,
            max_hits: entry.get("max_hits")?,
            drop_count: entry.get("drop_count")?,
            strike_period: entry.get("strike_period")?,
            recovery_time: entry.get("recovery_time")?,
        };
        Ok(data)
    }

    pub(crate) fn load_factory_kind(&self, entry: &Entry) -> Result<FactoryKind, DataError> {
        let data = FactoryKind {
            id: FactoryKey(entry.get("id")?),
            name: entry.get("name")?,
            input: self.known.items.find(entry.get_string("input")?)?.id,
            input_quantity: entry.get("input_quantity")?,
            output: self.known.items.find(entry.get_string("output")?)?.id,
            output_quantity: entry.get("output_quantity")?,
            craft_time: entry.get("craft_time")?,
        };
        Ok(data)
    }

    pub(crate) fn load_settings(&self, entry: &Entry) -> Result<Settings, DataError> {
        let data = Settings {
            scale_in_time: entry.get("scale_in_time")?,
            hold_time: entry.get("hold_time")?,
            flight_time: entry.get("flight_time")?,
            output_flight_time: entry.get("output_flight_time")?,
            drop_height: entry.get("drop_height")?,
            random_offset: entry.get("random_offset")?,
            delivery_period: entry.get("delivery_period")?,
            actor_speed: entry.get("actor_speed")?,
            trigger_radius: entry.get("trigger_radius")?,
        };
        Ok(data)
    }
}

/// Share of the item capacity, zero for items without maximum.
pub(crate) fn backpack_fullness(kind: &ItemKind, count: u32) -> f32 {
    match kind.max_quantity {
        Some(max) if max > 0 => count as f32 / max as f32,
        _ => 0.0,
    }
}
