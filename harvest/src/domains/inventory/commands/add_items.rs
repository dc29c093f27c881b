use log::debug;

use crate::inventory::Inventory::ItemsChanged;
use crate::inventory::{Inventory, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    /// Applies a signed change clamped to the item max.
    ///
    /// Returns the count the ledger will hold after the operation is completed.
    /// Negative changes beyond zero are rejected, use [`InventoryDomain::reduce_items`]
    /// to gate actions on availability.
    pub fn add_items<'operation>(
        &'operation mut self,
        item: ItemKey,
        delta: i64,
    ) -> Result<(u32, impl FnOnce() -> Vec<Inventory> + 'operation), InventoryError> {
        let stock = self.get_stock(item)?;
        if delta < 0 && (stock.count as i64) < -delta {
            return Err(InventoryError::NotEnoughItems {
                item,
                count: stock.count,
                requested: delta.unsigned_abs() as u32,
            });
        }
        let count = stock.clamp(delta);
        let operation = move || {
            let mut events = vec![];
            if let Ok(stock) = self.get_stock_mut(item) {
                debug!("Change {} count {} -> {}", stock.kind.name, stock.count, count);
                stock.count = count;
                events.push(ItemsChanged { item, count });
                self.react(item, count);
            }
            events
        };
        Ok((count, operation))
    }
}
