// QR Baghdad platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for QR Baghdad.
///
/// - **Linux**: `~/.config/qr-baghdad` (or `$XDG_CONFIG_HOME/qr-baghdad`)
/// - **macOS**: `~/Library/Application Support/QRBaghdad`
/// - **Windows**: `%APPDATA%/QRBaghdad`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory for QR Baghdad.
///
/// This is where the SQLite store lives.
///
/// - **Linux**: `~/.local/share/qr-baghdad` (or `$XDG_DATA_HOME/qr-baghdad`)
/// - **macOS**: `~/Library/Application Support/QRBaghdad`
/// - **Windows**: `%APPDATA%/QRBaghdad`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Returns the platform-specific cache directory for QR Baghdad.
///
/// This is where the offline cache controller keeps its version buckets.
///
/// - **Linux**: `~/.cache/qr-baghdad` (or `$XDG_CACHE_HOME/qr-baghdad`)
/// - **macOS**: `~/Library/Caches/QRBaghdad`
/// - **Windows**: `%LOCALAPPDATA%/QRBaghdad/cache`
pub fn get_cache_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_cache_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_cache_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_cache_dir()
    }
}
