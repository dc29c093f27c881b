use crate::inventory::{Inventory, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    /// Takes exactly `quantity` items or fails leaving the ledger untouched.
    pub fn reduce_items<'operation>(
        &'operation mut self,
        item: ItemKey,
        quantity: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let stock = self.get_stock(item)?;
        if stock.count < quantity {
            return Err(InventoryError::NotEnoughItems {
                item,
                count: stock.count,
                requested: quantity,
            });
        }
        let (_, operation) = self.add_items(item, -(quantity as i64))?;
        Ok(operation)
    }
}
