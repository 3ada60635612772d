// QR Baghdad platform paths for Windows
// Config: %APPDATA%/QRBaghdad
// Data:   %APPDATA%/QRBaghdad
// Cache:  %LOCALAPPDATA%/QRBaghdad/cache

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for QR Baghdad on Windows.
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("QRBaghdad")
}

/// Returns the data directory for QR Baghdad on Windows.
/// Same as the config directory, per platform convention.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}

/// Returns the cache directory for QR Baghdad on Windows.
pub fn get_cache_dir() -> PathBuf {
    let local = env::var("LOCALAPPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(local).join("QRBaghdad").join("cache")
}
