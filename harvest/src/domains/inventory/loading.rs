use log::warn;

use crate::collections::Shared;
use crate::inventory::{InventoryDomain, ItemKey, ItemKind, Stock};

impl InventoryDomain {
    pub fn load_stock(&mut self, kind: Shared<ItemKind>, count: u32) {
        let stock = Stock { kind, count: 0 };
        let clamped = stock.clamp(count as i64);
        if clamped != count {
            warn!(
                "Stored {} count {} exceeds max, clamped to {}",
                stock.kind.name, count, clamped
            );
        }
        self.stocks.insert(
            stock.kind.id,
            Stock {
                count: clamped,
                ..stock
            },
        );
    }

    /// Sends current counts of all items to reactors, used once after loading.
    pub fn react_all(&mut self) {
        for (item, count) in self.counts() {
            self.react(item, count);
        }
    }

    pub(crate) fn counts(&self) -> Vec<(ItemKey, u32)> {
        let mut counts: Vec<_> = self
            .stocks
            .iter()
            .map(|(item, stock)| (*item, stock.count))
            .collect();
        counts.sort();
        counts
    }
}
