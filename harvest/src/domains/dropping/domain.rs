use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::acting::ActorId;
use crate::collections::Sequence;
use crate::farming::SourceId;
use crate::inventory::ItemKey;
use crate::math::Position;
use crate::timing::TweenId;
use crate::working::FactoryId;

/// Pooled item tokens and the transits moving them.
#[derive(Default)]
pub struct DroppingDomain {
    pub tokens_id: Sequence,
    pub tokens: Vec<Token>,
    /// Free lists of released tokens per item.
    pub pools: HashMap<ItemKey, Vec<TokenId>>,
    pub transits_id: Sequence,
    pub transits: Vec<Transit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenState {
    Pooled,
    InWorld,
    InTransit,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub id: TokenId,
    pub item: ItemKey,
    pub position: Position,
    pub scale: f32,
    pub state: TokenState,
}

impl Token {
    #[inline]
    pub fn can_interact(&self) -> bool {
        self.state == TokenState::InWorld
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    Source(SourceId),
    Factory(FactoryId),
    Actor(ActorId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Receiver {
    Actor(ActorId),
    Factory(FactoryId),
    /// Inventory counter, credits the ledger on arrival.
    Counter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    ScaleIn,
    Hold,
    Flight,
    InWorld,
}

#[derive(Debug, Clone)]
pub struct Transit {
    pub id: TransitId,
    pub token: TokenId,
    pub item: ItemKey,
    pub quantity: u32,
    pub sender: Sender,
    pub receiver: Option<Receiver>,
    pub stage: Stage,
    pub origin: Position,
    pub impulse: f32,
    pub flight_time: f32,
    pub animation: Option<TweenId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Dropping {
    TransitStarted {
        transit: TransitId,
        token: TokenId,
        item: ItemKey,
        position: Position,
    },
    TokenUpdated {
        token: TokenId,
        position: Position,
        scale: f32,
    },
    TokenLanded {
        token: TokenId,
        item: ItemKey,
        position: Position,
    },
    TokenPickedUp {
        token: TokenId,
        transit: TransitId,
        receiver: Receiver,
    },
    TransitCompleted {
        transit: TransitId,
        token: TokenId,
        item: ItemKey,
        quantity: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DroppingError {
    TokenNotFound { id: TokenId },
    TransitNotFound { id: TransitId },
    TokenNotInWorld { id: TokenId },
}
