use crate::inventory::{InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    pub fn get_count(&self, item: ItemKey) -> Result<u32, InventoryError> {
        Ok(self.get_stock(item)?.count)
    }

    pub fn is_at_max(&self, item: ItemKey) -> Result<bool, InventoryError> {
        Ok(self.get_stock(item)?.is_at_max())
    }

    #[inline]
    pub fn has_items(&self, item: ItemKey, quantity: u32) -> bool {
        self.get_count(item).map(|count| count >= quantity).unwrap_or(false)
    }
}
