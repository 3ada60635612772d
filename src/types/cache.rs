use serde::{Deserialize, Serialize};

/// The fixed set of assets guaranteed to be cached under one version tag.
///
/// `version` names the cache bucket; bumping it is the only supported
/// mechanism to force a full asset refresh. The first URL in `urls` is the
/// page shell served as the offline fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheManifest {
    pub version: String,
    pub urls: Vec<String>,
}

impl CacheManifest {
    pub fn new(version: &str, urls: Vec<String>) -> Self {
        Self {
            version: version.to_string(),
            urls,
        }
    }

    /// The page shell URL used for offline fallback (first manifest entry).
    pub fn shell_url(&self) -> Option<&str> {
        self.urls.first().map(|s| s.as_str())
    }
}

/// Metadata persisted next to a cached response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryMeta {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
}

/// A stored network response: metadata plus raw body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedEntry {
    pub meta: EntryMeta,
    pub body: Vec<u8>,
}

/// A response fetched live from the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    /// Whether the response carries a success status (2xx).
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Lifecycle state of the cache controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No bucket installed for the current version yet.
    Idle,
    /// Install succeeded; waiting to take over serving.
    Waiting,
    /// Controlling all requests; old buckets garbage-collected.
    Active,
}

/// External commands accepted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerMessage {
    /// Activate immediately without waiting for open pages to close.
    SkipWaiting,
}

/// What the network returned for a cache miss, reduced to the two facts
/// the serve decision depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProbe {
    pub status: u16,
    pub same_origin: bool,
}

/// Outcome of the per-request decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServePlan {
    /// Cache hit: return the cached bytes verbatim, no network involved.
    Cached,
    /// Miss, good same-origin response: serve it and store a copy.
    StoreAndServe,
    /// Miss, response not cacheable: pass it through unmodified.
    ServeUncached,
    /// Miss and the network failed: fall back to the cached page shell.
    ShellFallback,
}

/// Where a served response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeSource {
    Cache,
    Network,
    OfflineShell,
}

/// A response handed back to the requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedResponse {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub source: ServeSource,
}
