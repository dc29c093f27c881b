use serde::{Deserialize, Serialize};

use crate::collections::Dictionary;
use crate::farming::{SourceKey, SourceKind};
use crate::inventory::{ItemKey, ItemKind};
use crate::working::{FactoryKey, FactoryKind};

#[derive(Default)]
pub struct Knowledge {
    pub items: Dictionary<ItemKey, ItemKind>,
    pub sources: Dictionary<SourceKey, SourceKind>,
    pub factories: Dictionary<FactoryKey, FactoryKind>,
    pub settings: Settings,
}

/// Global timings of drops and actor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub scale_in_time: f32,
    /// Pause between token appearance and its flight.
    pub hold_time: f32,
    pub flight_time: f32,
    /// Flight of a crafted batch to the inventory counter.
    pub output_flight_time: f32,
    pub drop_height: f32,
    pub random_offset: f32,
    /// Pause between deliveries of input to a factory.
    pub delivery_period: f32,
    pub actor_speed: f32,
    /// Radius of built-in proximity sensing, external sensing is expected without it.
    pub trigger_radius: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale_in_time: 0.2,
            hold_time: 0.2,
            flight_time: 0.5,
            output_flight_time: 1.0,
            drop_height: 0.5,
            random_offset: 0.2,
            delivery_period: 1.0,
            actor_speed: 4.0,
            trigger_radius: None,
        }
    }
}
