//! Ordered header → values mapping.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The full set of active columns for one save/generate/load cycle.
///
/// Keys are unique and iteration follows insertion order, which is also the
/// CSV column order. Serializes as a map so the persisted record reads as
/// `{"Header": ["value", ...]}` in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    columns: Vec<(String, Vec<String>)>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a column.
    ///
    /// An existing header keeps its position and has its values replaced;
    /// the previous values are returned.
    pub fn insert(&mut self, header: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        let header = header.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == header) {
            Some((_, existing)) => Some(std::mem::replace(existing, values)),
            None => {
                self.columns.push((header, values));
                None
            }
        }
    }

    pub fn get(&self, header: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == header)
            .map(|(_, values)| values.as_slice())
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(header, _)| header.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns
            .iter()
            .map(|(header, values)| (header.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<H: Into<String>> FromIterator<(H, Vec<String>)> for Configuration {
    fn from_iter<T: IntoIterator<Item = (H, Vec<String>)>>(iter: T) -> Self {
        let mut config = Self::new();
        for (header, values) in iter {
            config.insert(header, values);
        }
        config
    }
}

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (header, values) in &self.columns {
            map.serialize_entry(header, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(ConfigurationVisitor)
    }
}

struct ConfigurationVisitor;

impl<'de> Visitor<'de> for ConfigurationVisitor {
    type Value = Configuration;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of column headers to lists of values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Configuration, A::Error> {
        let mut config = Configuration::new();
        while let Some((header, values)) = access.next_entry::<String, Vec<String>>()? {
            config.insert(header, values);
        }
        Ok(config)
    }
}
