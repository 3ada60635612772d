//! QR Baghdad offline cache controller.
//!
//! A component independent of any single application instance that mediates
//! asset requests: cache-first serving with network fallback, versioned
//! bucket invalidation on upgrade, and an offline shell fallback. It shares
//! nothing with the application layer except the platform cache directory
//! and the network.
//!
//! Lifecycle: `install` populates a bucket named for the current version
//! (all-or-nothing), `activate` garbage-collects every other bucket, and
//! `handle_request` serves the steady state one decision at a time.

pub mod controller;
pub mod fetcher;
pub mod store;

pub use controller::{serve_plan, CacheController};
pub use fetcher::{AssetFetcher, HttpFetcher};
pub use store::BucketStore;

use crate::types::cache::CacheManifest;

/// Cache bucket version tag. Bumping this string is the only supported
/// mechanism to force a full asset refresh for all clients.
pub const CACHE_VERSION: &str = "qr-baghdad-v1.0";

/// Origin the page assets are served from; relative manifest URLs resolve
/// against it.
pub const APP_ORIGIN: &str = "https://qr-baghdad.app";

/// The fixed asset manifest: page shell first, then styles, script, icons,
/// and the two external URLs (QR library and font stylesheet).
pub fn default_manifest() -> CacheManifest {
    CacheManifest::new(
        CACHE_VERSION,
        vec![
            "index.html".to_string(),
            "styles.css".to_string(),
            "app.js".to_string(),
            "icon-192.png".to_string(),
            "icon-512.png".to_string(),
            "https://cdn.jsdelivr.net/npm/qrcode/build/qrcode.min.js".to_string(),
            "https://fonts.googleapis.com/css2?family=Cairo:wght@400;600;700&display=swap"
                .to_string(),
        ],
    )
}
