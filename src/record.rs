use csv::StringRecord;
use std::collections::HashMap;

/// One input row keyed by the header of the file it came from.
///
/// A header column the row is too short to fill is kept with no value. That
/// is different from a column the file never had: [`Record::value_or`] only
/// falls back to its default for the latter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, Option<String>>,
}

impl Record {
    /// Zips a header row with a data row. Values past the end of the header
    /// are dropped; header names past the end of the row get no value. With
    /// repeated header names the last column wins.
    pub fn from_row(headers: &StringRecord, row: &StringRecord) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.to_string(), row.get(index).map(str::to_string)))
            .collect();
        Self { fields }
    }

    /// Returns the value of `field` if the row carries one.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Option::as_deref)
    }

    /// Returns the value of `field`, or `default` when the row has no value for it.
    pub fn get_or<'a>(&'a self, field: &str, default: &'a str) -> &'a str {
        self.get(field).unwrap_or(default)
    }

    /// Like [`Record::get_or`], but `None` when the header names `field` and
    /// the row ended before reaching it.
    pub fn value_or<'a>(&'a self, field: &str, default: &'a str) -> Option<&'a str> {
        match self.fields.get(field) {
            Some(value) => value.as_deref(),
            None => Some(default),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}
