use qr_baghdad::types::errors::*;

// === HistoryError Tests ===

#[test]
fn history_error_storage_display() {
    let err = HistoryError::StorageError("disk full".to_string());
    assert_eq!(err.to_string(), "History storage error: disk full");
}

#[test]
fn history_error_serialization_display() {
    let err = HistoryError::SerializationError("bad blob".to_string());
    assert_eq!(err.to_string(), "History serialization error: bad blob");
}

#[test]
fn history_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(HistoryError::StorageError("disk full".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::StorageError("locked".to_string()).to_string(),
        "Settings storage error: locked"
    );
    assert_eq!(
        SettingsError::SerializationError("truncated".to_string()).to_string(),
        "Settings serialization error: truncated"
    );
}

// === RenderError Tests ===

#[test]
fn render_error_display_variants() {
    assert_eq!(RenderError::EmptyInput.to_string(), "Input text is empty");
    assert_eq!(
        RenderError::EncodingFailed("data too long".to_string()).to_string(),
        "QR encoding failed: data too long"
    );
    assert_eq!(
        RenderError::InvalidColor("#zzz".to_string()).to_string(),
        "Invalid color: #zzz"
    );
    assert_eq!(
        RenderError::NoArtifact.to_string(),
        "No QR code has been generated yet"
    );
    assert_eq!(
        RenderError::IoError("permission denied".to_string()).to_string(),
        "Image write error: permission denied"
    );
}

// === CacheError Tests ===

#[test]
fn cache_error_display_variants() {
    assert_eq!(
        CacheError::InstallFailed("styles.css: status 404".to_string()).to_string(),
        "Cache install failed: styles.css: status 404"
    );
    assert_eq!(
        CacheError::NetworkError("timed out".to_string()).to_string(),
        "Cache network error: timed out"
    );
    assert_eq!(
        CacheError::StoreError("read-only".to_string()).to_string(),
        "Cache store error: read-only"
    );
    assert_eq!(
        CacheError::Offline("https://qr.test/app.js".to_string()).to_string(),
        "Offline and not cached: https://qr.test/app.js"
    );
}

#[test]
fn cache_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(CacheError::Offline("x".to_string()));
    assert!(err.source().is_none());
}
