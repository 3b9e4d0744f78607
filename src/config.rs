//! Grid constants and their string overrides.

use crate::error::ConfigError;

pub const DEFAULT_COLUMNS: usize = 3;
pub const DEFAULT_TOTAL_TILES: usize = 37;
pub const DEFAULT_MARGIN: f64 = 20.0;
pub const DEFAULT_ARTBOARD: &str = "Tile_Art1";
pub const DEFAULT_ASSET_URL: &str = "moving_things_001.riv";
/// Every tile is a live engine artboard, so the grid size is capped.
pub const MAX_TILES: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub columns: usize,
    pub total_tiles: usize,
    /// Gap between cells and around the grid edge, in canvas pixels.
    pub margin: f64,
    pub artboard: String,
    pub state_machine_index: usize,
    pub asset_url: String,
    /// Paint a translucent rectangle over every visible tile.
    pub debug_overlay: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            total_tiles: DEFAULT_TOTAL_TILES,
            margin: DEFAULT_MARGIN,
            artboard: DEFAULT_ARTBOARD.to_owned(),
            state_machine_index: 0,
            asset_url: DEFAULT_ASSET_URL.to_owned(),
            debug_overlay: false,
        }
    }
}

impl GridConfig {
    /// Override one field from a `key=value` pair, e.g. a URL query parameter.
    /// Unknown keys are logged and skipped.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
        };
        match key {
            "columns" => self.columns = value.parse().map_err(|_| invalid())?,
            "tiles" => self.total_tiles = value.parse().map_err(|_| invalid())?,
            "margin" => self.margin = value.parse().map_err(|_| invalid())?,
            "artboard" => self.artboard = value.to_owned(),
            "state_machine" => self.state_machine_index = value.parse().map_err(|_| invalid())?,
            "asset" => self.asset_url = value.to_owned(),
            "debug" => {
                self.debug_overlay = match value {
                    "" | "1" | "true" | "on" => true,
                    "0" | "false" | "off" => false,
                    _ => return Err(invalid()),
                }
            }
            _ => log::warn!("ignoring unknown config key `{key}`"),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.total_tiles > MAX_TILES {
            return Err(ConfigError::TooManyTiles {
                count: self.total_tiles,
                max: MAX_TILES,
            });
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::InvalidMargin(self.margin));
        }
        if self.artboard.is_empty() {
            return Err(ConfigError::EmptyArtboard);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_constants() {
        let config = GridConfig::default();
        assert_eq!(config.columns, 3);
        assert_eq!(config.total_tiles, 37);
        assert_eq!(config.margin, 20.0);
        assert_eq!(config.artboard, "Tile_Art1");
        assert!(!config.debug_overlay);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn overrides_parse() {
        let mut config = GridConfig::default();
        config.apply("columns", "4").unwrap();
        config.apply("margin", "12.5").unwrap();
        config.apply("debug", "1").unwrap();
        config.apply("artboard", "Other").unwrap();
        assert_eq!(config.columns, 4);
        assert_eq!(config.margin, 12.5);
        assert!(config.debug_overlay);
        assert_eq!(config.artboard, "Other");
    }

    #[test]
    fn bad_override_is_rejected() {
        let mut config = GridConfig::default();
        let err = config.apply("columns", "three").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "columns".into(),
                value: "three".into()
            }
        );
        assert_eq!(config.columns, 3);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut config = GridConfig::default();
        assert!(config.apply("zoom", "2").is_ok());
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn validate_rejects_degenerate_grids() {
        let mut config = GridConfig::default();
        config.columns = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroColumns));

        let mut config = GridConfig::default();
        config.margin = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidMargin(-1.0)));

        let mut config = GridConfig::default();
        config.apply("tiles", "18446744073709551615").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyTiles {
                count: usize::MAX,
                max: MAX_TILES
            })
        );

        let mut config = GridConfig::default();
        config.total_tiles = MAX_TILES;
        assert_eq!(config.validate(), Ok(()));

        let mut config = GridConfig::default();
        config.artboard.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyArtboard));
    }
}
