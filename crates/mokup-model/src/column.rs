//! Column configuration and its editing-state counterpart.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Value slots per column offered by the default editing layout.
pub const DEFAULT_VALUE_SLOTS: usize = 12;

/// Columns offered by the default editing layout.
pub const DEFAULT_COLUMN_SLOTS: usize = 8;

/// One column's header and candidate values.
///
/// Construction trims the header and every value and drops values that are
/// empty after trimming. Duplicate values are kept: each copy is another
/// chance to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    header: String,
    values: Vec<String>,
}

impl ColumnConfig {
    pub fn new<I, S>(header: impl AsRef<str>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .map(|value| value.as_ref().trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();
        Self {
            header: header.as_ref().trim().to_string(),
            values,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// A column takes part in a configuration only with a header and at least one value.
    pub fn is_active(&self) -> bool {
        !self.header.is_empty() && !self.values.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.header, self.values)
    }
}

/// Shape of the editing surface: how many columns, and value slots per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotLayout {
    pub columns: usize,
    pub values_per_column: usize,
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMN_SLOTS,
            values_per_column: DEFAULT_VALUE_SLOTS,
        }
    }
}

impl SlotLayout {
    pub fn new(columns: usize, values_per_column: usize) -> Result<Self> {
        let layout = Self {
            columns,
            values_per_column,
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.values_per_column == 0 {
            return Err(ModelError::InvalidLayout {
                columns: self.columns,
                values_per_column: self.values_per_column,
            });
        }
        Ok(())
    }
}

/// Editing state for one column: a header and a fixed number of value slots.
///
/// The slot count never changes after construction, so a surface rendering
/// one input per slot stays structurally stable whatever gets loaded into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSlots {
    header: String,
    slots: Vec<String>,
}

impl ColumnSlots {
    pub fn new(capacity: usize) -> Self {
        Self {
            header: String::new(),
            slots: vec![String::new(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    /// Overwrite a single slot. Returns `false` when `index` is past capacity.
    pub fn set_slot(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Resolve the current state into a sanitized [`ColumnConfig`].
    pub fn get(&self) -> ColumnConfig {
        ColumnConfig::new(&self.header, &self.slots)
    }

    /// Load a header and values into the slots.
    ///
    /// Slots past the end of `values` are blanked. Returns how many values
    /// did not fit.
    pub fn set<I, S>(&mut self, header: impl Into<String>, values: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = header.into();
        let mut values = values.into_iter();
        for slot in &mut self.slots {
            *slot = values.next().map(Into::into).unwrap_or_default();
        }
        values.count()
    }

    pub fn clear(&mut self) {
        self.header.clear();
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}
