// QR Baghdad platform paths for macOS
// Config: ~/Library/Application Support/QRBaghdad
// Data:   ~/Library/Application Support/QRBaghdad
// Cache:  ~/Library/Caches/QRBaghdad

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
}

/// Returns the configuration directory for QR Baghdad on macOS.
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("QRBaghdad")
}

/// Returns the data directory for QR Baghdad on macOS.
/// Same as the config directory, per platform convention.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}

/// Returns the cache directory for QR Baghdad on macOS.
pub fn get_cache_dir() -> PathBuf {
    home_dir().join("Library").join("Caches").join("QRBaghdad")
}
