//! A single parsed datastore row.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One data row as an ordered column → value mapping.
///
/// Columns keep the order of the header they were read with. Looking up a
/// column the record does not have yields an empty string. A projected
/// record may hold the same column more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record by pairing header names with row values.
    ///
    /// Missing trailing values become empty strings; values past the end of
    /// the header are dropped.
    pub fn from_row<'h, 'v, H, V>(header: H, values: V) -> Self
    where
        H: IntoIterator<Item = &'h str>,
        V: IntoIterator<Item = &'v str>,
    {
        let mut values = values.into_iter();
        let mut record = Record::new();
        for column in header {
            record.insert(column, values.next().unwrap_or(""));
        }
        record
    }

    /// Set a column's value. A repeated column keeps its first position and
    /// takes the latest value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some(field) => field.1 = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Append a column without merging it into an existing one.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.push((column.into(), value.into()));
    }

    /// Value of `column`, or `""` if absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<C, V> FromIterator<(C, V)> for Record
where
    C: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

// Serialized as a map so JSON output keeps header order.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
