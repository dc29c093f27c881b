use log::debug;
use rusqlite::{params, OptionalExtension};

use crate::Storage;

const COUNTS_TABLE: &str = "create table if not exists Inventory (
    item text primary key,
    count integer not null default 0
);";

impl Storage {
    pub fn setup_counts(&self) -> rusqlite::Result<()> {
        self.connection().execute_batch(COUNTS_TABLE)
    }

    pub fn get_item_count(&self, item: &str) -> rusqlite::Result<u32> {
        let count: Option<u32> = self
            .connection()
            .query_row(
                "select count from Inventory where item = ?",
                [item],
                |row| row.get(0),
            )
            .optional()?;
        Ok(count.unwrap_or(0))
    }

    pub fn save_item_counts<'a, I>(&mut self, counts: I) -> rusqlite::Result<()>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let transaction = self.connection_mut().transaction()?;
        {
            let mut statement = transaction.prepare(
                "insert into Inventory (item, count) values (?, ?)
                 on conflict(item) do update set count = excluded.count",
            )?;
            for (item, count) in counts {
                debug!("Save {} count {}", item, count);
                statement.execute(params![item, count])?;
            }
        }
        transaction.commit()
    }
}
