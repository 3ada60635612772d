use std::fmt;

// === HistoryError ===

/// Errors related to history management operations.
#[derive(Debug)]
pub enum HistoryError {
    /// Durable storage read or write failed.
    StorageError(String),
    /// The persisted history blob could not be parsed.
    SerializationError(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::StorageError(msg) => write!(f, "History storage error: {}", msg),
            HistoryError::SerializationError(msg) => {
                write!(f, "History serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// Durable storage read or write failed.
    StorageError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::StorageError(msg) => write!(f, "Settings storage error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === RenderError ===

/// Errors related to QR rendering and download.
#[derive(Debug)]
pub enum RenderError {
    /// The input text was empty after trimming.
    EmptyInput,
    /// The external encoder rejected the payload.
    EncodingFailed(String),
    /// A color string could not be parsed as `#rrggbb`.
    InvalidColor(String),
    /// No artifact has been rendered yet, so there is nothing to download.
    NoArtifact,
    /// Writing the image file failed.
    IoError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyInput => write!(f, "Input text is empty"),
            RenderError::EncodingFailed(msg) => write!(f, "QR encoding failed: {}", msg),
            RenderError::InvalidColor(color) => write!(f, "Invalid color: {}", color),
            RenderError::NoArtifact => write!(f, "No QR code has been generated yet"),
            RenderError::IoError(msg) => write!(f, "Image write error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

// === CacheError ===

/// Errors related to the offline cache controller.
#[derive(Debug)]
pub enum CacheError {
    /// Installation of the manifest failed; no bucket was created.
    InstallFailed(String),
    /// A network fetch failed.
    NetworkError(String),
    /// A bucket store read or write failed.
    StoreError(String),
    /// Cached entry metadata could not be parsed.
    SerializationError(String),
    /// The request missed the cache, the network is unreachable, and no
    /// shell entry exists to fall back to.
    Offline(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InstallFailed(msg) => write!(f, "Cache install failed: {}", msg),
            CacheError::NetworkError(msg) => write!(f, "Cache network error: {}", msg),
            CacheError::StoreError(msg) => write!(f, "Cache store error: {}", msg),
            CacheError::SerializationError(msg) => {
                write!(f, "Cache serialization error: {}", msg)
            }
            CacheError::Offline(url) => write!(f, "Offline and not cached: {}", url),
        }
    }
}

impl std::error::Error for CacheError {}
