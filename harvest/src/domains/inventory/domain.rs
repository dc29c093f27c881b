use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::collections::Shared;
use crate::inventory::InventoryError::ItemNotFound;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey(pub usize);

#[derive(Debug)]
pub struct ItemKind {
    pub id: ItemKey,
    pub name: String,
    pub max_quantity: Option<u32>,
    pub physical_impulse: f32,
    pub backpack: bool,
}

pub struct Stock {
    pub kind: Shared<ItemKind>,
    pub count: u32,
}

/// Listener of every ledger change, e.g. an inventory counter on screen.
pub trait TransactionReactor {
    fn react(&mut self, item: ItemKey, count: u32);
}

impl<F> TransactionReactor for F
where
    F: FnMut(ItemKey, u32),
{
    fn react(&mut self, item: ItemKey, count: u32) {
        self(item, count)
    }
}

#[derive(Default)]
pub struct InventoryDomain {
    pub stocks: HashMap<ItemKey, Stock>,
    pub reactors: Vec<Box<dyn TransactionReactor>>,
}

impl Debug for InventoryDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(ItemKey, u32)> = self
            .stocks
            .iter()
            .map(|(item, stock)| (*item, stock.count))
            .collect();
        counts.sort();
        f.debug_struct("InventoryDomain")
            .field("counts", &counts)
            .field("reactors", &self.reactors.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inventory {
    ItemsChanged { item: ItemKey, count: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryError {
    ItemNotFound {
        item: ItemKey,
    },
    NotEnoughItems {
        item: ItemKey,
        count: u32,
        requested: u32,
    },
}

impl InventoryDomain {
    /// Syncs the reactor with counts loaded so far, registering before loading is fine too.
    pub fn register_reactor(&mut self, mut reactor: Box<dyn TransactionReactor>) {
        for (item, count) in self.counts() {
            reactor.react(item, count);
        }
        self.reactors.push(reactor);
    }

    pub fn get_stock(&self, item: ItemKey) -> Result<&Stock, InventoryError> {
        self.stocks.get(&item).ok_or(ItemNotFound { item })
    }

    pub(crate) fn get_stock_mut(&mut self, item: ItemKey) -> Result<&mut Stock, InventoryError> {
        self.stocks.get_mut(&item).ok_or(ItemNotFound { item })
    }

    /// Notifies reactors in registration order, the ledger must be consistent already.
    pub(crate) fn react(&mut self, item: ItemKey, count: u32) {
        for reactor in self.reactors.iter_mut() {
            reactor.react(item, count);
        }
    }
}

impl Stock {
    /// Clamps a signed change to `[0, max]`.
    pub fn clamp(&self, delta: i64) -> u32 {
        let expected = (self.count as i64 + delta).max(0);
        let expected = match self.kind.max_quantity {
            Some(max) => expected.min(max as i64),
            None => expected.min(u32::MAX as i64),
        };
        expected as u32
    }

    #[inline]
    pub fn is_at_max(&self) -> bool {
        match self.kind.max_quantity {
            Some(max) => self.count >= max,
            None => false,
        }
    }
}
