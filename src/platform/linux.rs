// QR Baghdad platform paths for Linux
// Config: ~/.config/qr-baghdad
// Data:   ~/.local/share/qr-baghdad
// Cache:  ~/.cache/qr-baghdad

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for QR Baghdad on Linux.
/// Uses `$XDG_CONFIG_HOME/qr-baghdad` if set, otherwise `~/.config/qr-baghdad`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("qr-baghdad")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("qr-baghdad")
    }
}

/// Returns the data directory for QR Baghdad on Linux.
/// Uses `$XDG_DATA_HOME/qr-baghdad` if set, otherwise `~/.local/share/qr-baghdad`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("qr-baghdad")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("qr-baghdad")
    }
}

/// Returns the cache directory for QR Baghdad on Linux.
/// Uses `$XDG_CACHE_HOME/qr-baghdad` if set, otherwise `~/.cache/qr-baghdad`.
pub fn get_cache_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("qr-baghdad")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".cache").join("qr-baghdad")
    }
}
