use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Display toggles.
pub struct DisplayOptions {
    /// Whether the electric field arrows are drawn.
    pub show_electric_field: bool,
    /// Log the smoothed frame rate about once per second.
    pub log_frame_rate: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_electric_field: true,
            log_frame_rate: true,
        }
    }
}

impl DisplayOptions {
    /// Flip the field overlay visibility and return the new state.
    pub fn toggle_electric_field(&mut self) -> bool {
        self.show_electric_field = !self.show_electric_field;
        self.show_electric_field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_visibility() {
        let mut display = DisplayOptions::default();
        assert!(!display.toggle_electric_field());
        assert!(!display.show_electric_field);
        assert!(display.toggle_electric_field());
    }
}
