use serde::{Deserialize, Serialize};

/// User-facing QR generation settings.
///
/// Always fully populated: first run takes the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QrSettings {
    /// Pixel dimension of the generated (square) image.
    pub size: u32,
    /// Foreground color as a `#rrggbb` hex string.
    pub dark_color: String,
    /// Background color as a `#rrggbb` hex string.
    pub light_color: String,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            size: 256,
            dark_color: "#2c3e50".to_string(),
            light_color: "#ffffff".to_string(),
        }
    }
}
