//! Centralized view options with TOML preset support.
//!
//! All tweakable settings (display toggle, camera, lighting, field sampling,
//! scene geometry, colors, keybindings) are consolidated here. Options
//! serialize to/from TOML so a view can be stored and reloaded.

mod camera;
mod colors;
mod display;
mod field;
mod geometry;
mod lighting;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use field::FieldOptions;
pub use geometry::GeometryOptions;
pub use lighting::LightingOptions;
use serde::{Deserialize, Serialize};

use crate::error::EfieldError;
use crate::input::KeyBindings;

/// Largest accepted `field.resolution` (over a million arrows).
const MAX_FIELD_RESOLUTION: u32 = 1024;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[field]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Display toggles.
    pub display: DisplayOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Spot and ambient light parameters.
    pub lighting: LightingOptions,
    /// Field sampling grid and arrow scaling.
    pub field: FieldOptions,
    /// Ground plane, charge disc and arrow glyph dimensions.
    pub geometry: GeometryOptions,
    /// Color palette.
    pub colors: ColorOptions,
    /// Keyboard binding options.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::Io`] if the file cannot be read,
    /// [`EfieldError::OptionsParse`] on malformed TOML and
    /// [`EfieldError::InvalidOptions`] if the values fail validation.
    pub fn load(path: &Path) -> Result<Self, EfieldError> {
        let content = std::fs::read_to_string(path).map_err(EfieldError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| EfieldError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError`] on serialization or I/O failure.
    pub fn save(&self, path: &Path) -> Result<(), EfieldError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EfieldError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EfieldError::Io)?;
        }
        std::fs::write(path, content).map_err(EfieldError::Io)
    }

    /// Reject values the scene builder cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidOptions`] naming the offending field.
    pub fn validate(&self) -> Result<(), EfieldError> {
        let invalid = |msg: &str| Err(EfieldError::InvalidOptions(msg.into()));
        if self.field.resolution < 2 {
            return invalid("field.resolution must be at least 2");
        }
        if self.field.resolution > MAX_FIELD_RESOLUTION {
            return invalid("field.resolution must be at most 1024");
        }
        if self.field.half_extent <= 0.0 || !self.field.half_extent.is_finite()
        {
            return invalid("field.half_extent must be positive");
        }
        if self.field.arrow_scale <= 0.0 || !self.field.arrow_scale.is_finite()
        {
            return invalid("field.arrow_scale must be positive");
        }
        if self.geometry.charge_segments < 3 {
            return invalid("geometry.charge_segments must be at least 3");
        }
        if self.camera.min_distance <= 0.0
            || self.camera.min_distance > self.camera.max_distance
        {
            return invalid(
                "camera.min_distance must be positive and <= max_distance",
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[display]
show_electric_field = false

[field]
resolution = 20
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert!(!opts.display.show_electric_field);
        assert_eq!(opts.field.resolution, 20);
        // Everything else should be default
        assert_eq!(opts.field.half_extent, 15.0);
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.colors.background, ColorOptions::default().background);
    }

    #[test]
    fn defaults_match_reference_scene() {
        let opts = Options::default();
        assert!(opts.display.show_electric_field);
        assert_eq!(opts.field.resolution, 40);
        assert_eq!(opts.field.arrow_scale, 10.0);
        assert_eq!(opts.camera.eye, [20.0, 20.0, 50.0]);
        assert_eq!(opts.camera.target, [0.0, 0.0, 5.0]);
        assert_eq!(opts.geometry.ground_size, 50.0);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn validation_rejects_degenerate_grid() {
        let mut opts = Options::default();
        opts.field.resolution = 1;
        assert!(matches!(
            opts.validate(),
            Err(EfieldError::InvalidOptions(_))
        ));

        let mut opts = Options::default();
        opts.field.half_extent = 0.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.geometry.charge_segments = 2;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.camera.min_distance = 500.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn validation_caps_grid_resolution() {
        let mut opts = Options::default();
        opts.field.resolution = 70_000;
        assert!(matches!(
            opts.validate(),
            Err(EfieldError::InvalidOptions(msg)) if msg.contains("at most")
        ));

        opts.field.resolution = MAX_FIELD_RESOLUTION;
        assert!(opts.validate().is_ok());

        let parsed: Options =
            toml::from_str("[field]\nresolution = 70000\n").unwrap();
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn save_then_load_preserves_options() {
        let dir = std::env::temp_dir().join(format!(
            "efield-options-{}",
            std::process::id()
        ));
        let path = dir.join("view.toml");

        let mut opts = Options::default();
        opts.display.show_electric_field = false;
        opts.field.arrow_scale = 4.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir().join(format!(
            "efield-bad-options-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[field\nresolution = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(EfieldError::OptionsParse(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::engine::ViewCommand;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyE"),
            Some(ViewCommand::ToggleElectricField)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyQ"),
            Some(ViewCommand::ResetCamera)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }
}
