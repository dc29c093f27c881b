use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, Params};

use log::info;
use serde::de::Error;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

pub struct Storage {
    connection: Connection,
}

pub struct Entry {
    columns: Rc<HashMap<String, usize>>,
    values: Vec<Value>,
}

impl Entry {
    pub fn get<'a, T: Deserialize<'a>>(&'a self, index: &str) -> Result<T, serde_json::Error> {
        let index = *self
            .columns
            .get(index)
            .ok_or_else(|| serde_json::Error::custom(format!("column {} not found", index)))?;
        T::deserialize(&self.values[index])
    }

    pub fn get_string(&self, index: &str) -> Result<&str, serde_json::Error> {
        self.get(index)
    }

    pub fn get_bool(&self, index: &str) -> Result<bool, serde_json::Error> {
        let value: i32 = self.get(index)?;
        Ok(value == 1)
    }
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        info!("Open storage {:?}", path.as_ref());
        Connection::open(path.as_ref()).map(|connection| Storage { connection })
    }

    pub fn memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(|connection| Storage { connection })
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    #[inline]
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.connection
    }

    pub fn execute_script(&self, script: &str) -> rusqlite::Result<()> {
        self.connection.execute_batch(script)
    }

    pub fn fetch_one<T>(&self, id: &str) -> rusqlite::Result<Entry> {
        self.query::<T, _>([id], "where id = ?")?
            .into_iter()
            .next()
            .ok_or(rusqlite::Error::QueryReturnedNoRows)
    }

    pub fn fetch_all<T>(&self) -> rusqlite::Result<Vec<Entry>> {
        self.query::<T, _>([], "")
    }

    fn query<T, P: Params>(&self, params: P, where_clause: &str) -> rusqlite::Result<Vec<Entry>> {
        let table = table_name::<T>();
        let mut statement = self
            .connection
            .prepare(&format!("select * from {} {}", table, where_clause))?;
        let mut columns: HashMap<String, usize> = Default::default();
        for (index, column) in statement.column_names().iter().enumerate() {
            columns.insert(column.to_string(), index);
        }
        let columns_count = columns.len();
        let columns = Rc::new(columns);
        let mut rows = statement.query(params)?;
        let mut entries = vec![];
        while let Some(row) = rows.next()? {
            let mut values = vec![];
            for index in 0..columns_count {
                values.push(parse_value(index, row.get_ref(index)?)?);
            }
            let entry = Entry {
                columns: columns.clone(),
                values,
            };
            entries.push(entry);
        }
        Ok(entries)
    }
}

fn parse_value(index: usize, value: ValueRef) -> rusqlite::Result<Value> {
    let value = match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(data) => Value::Number(Number::from(data)),
        ValueRef::Real(data) => Number::from_f64(data)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(ptr) => {
            if ptr.first() == Some(&b'[') || ptr.first() == Some(&b'{') {
                serde_json::from_slice(ptr).map_err(|error| {
                    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error))
                })?
            } else {
                Value::String(String::from_utf8_lossy(ptr).to_string())
            }
        }
        ValueRef::Blob(ptr) => serde_json::from_slice(ptr).map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(index, Type::Blob, Box::new(error))
        })?,
    };
    Ok(value)
}

#[inline]
pub fn table_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
