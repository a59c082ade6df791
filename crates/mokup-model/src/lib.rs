//! Column configuration model for mock CSV synthesis.
//!
//! - [`ColumnConfig`]: one column's header and candidate values
//! - [`ColumnSlots`]: fixed-capacity editing state that resolves to a `ColumnConfig`
//! - [`Configuration`]: ordered header → values mapping fed to the store and synthesizer

pub mod column;
pub mod configuration;
pub mod error;

pub use column::{
    ColumnConfig, ColumnSlots, DEFAULT_COLUMN_SLOTS, DEFAULT_VALUE_SLOTS, SlotLayout,
};
pub use configuration::Configuration;
pub use error::{ModelError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_assemble_into_configuration() {
        let layout = SlotLayout::default();
        let mut color = ColumnSlots::new(layout.values_per_column);
        color.set("Color", ["Red", " Blue "]);
        let mut empty = ColumnSlots::new(layout.values_per_column);
        empty.set("Unused", Vec::<String>::new());

        let config: Configuration = [color.get(), empty.get()]
            .into_iter()
            .filter(ColumnConfig::is_active)
            .map(ColumnConfig::into_parts)
            .collect();

        assert_eq!(config.len(), 1);
        assert_eq!(
            config.get("Color"),
            Some(&["Red".to_string(), "Blue".to_string()][..])
        );
    }
}
