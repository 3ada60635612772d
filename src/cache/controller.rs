//! Cache controller state machine: install, activate, serve.
//!
//! Strategy is cache-first with network fallback: instant load and offline
//! availability win over freshness, and the versioned bucket name is the
//! sole invalidation mechanism — there is no per-asset expiry.

use log::{debug, info, warn};

use crate::cache::fetcher::AssetFetcher;
use crate::cache::store::BucketStore;
use crate::types::cache::{
    CacheManifest, CachedEntry, ControllerMessage, ControllerState, EntryMeta, NetworkProbe,
    ServePlan, ServeSource, ServedResponse,
};
use crate::types::errors::CacheError;

/// The per-request decision table as pure logic over (cache lookup result,
/// network result).
///
/// - hit → cached bytes, no network;
/// - miss + 200 same-origin ("basic") response → serve and store a copy;
/// - miss + any other response → pass through uncached;
/// - miss + network failure → fall back to the cached page shell.
pub fn serve_plan(cache_hit: bool, network: Option<NetworkProbe>) -> ServePlan {
    if cache_hit {
        return ServePlan::Cached;
    }
    match network {
        Some(probe) if probe.status == 200 && probe.same_origin => ServePlan::StoreAndServe,
        Some(_) => ServePlan::ServeUncached,
        None => ServePlan::ShellFallback,
    }
}

/// Long-lived controller mediating all asset requests.
pub struct CacheController {
    manifest: CacheManifest,
    origin: String,
    store: BucketStore,
    fetcher: Box<dyn AssetFetcher>,
    state: ControllerState,
}

impl CacheController {
    /// Creates a controller for `manifest`, resolving relative manifest URLs
    /// against `origin`.
    pub fn new(
        manifest: CacheManifest,
        origin: &str,
        store: BucketStore,
        fetcher: Box<dyn AssetFetcher>,
    ) -> Self {
        Self {
            manifest,
            origin: origin.trim_end_matches('/').to_string(),
            store,
            fetcher,
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn version(&self) -> &str {
        &self.manifest.version
    }

    /// Resolves a manifest or request URL to an absolute URL.
    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}/{}", self.origin, url.trim_start_matches('/'))
        }
    }

    /// Whether an absolute URL belongs to the controller's origin, i.e.
    /// whether its response would be a "basic" one.
    fn is_same_origin(&self, absolute: &str) -> bool {
        absolute == self.origin || absolute.starts_with(&format!("{}/", self.origin))
    }

    /// Installs the current version: fetches every manifest URL fresh from
    /// the network, then populates the bucket.
    ///
    /// Population is all-or-nothing: any single fetch failure (transport
    /// error or non-2xx status) abandons the install, no bucket is created,
    /// and any previously active version keeps serving.
    pub async fn install(&mut self) -> Result<(), CacheError> {
        info!("installing cache bucket {}", self.manifest.version);
        let mut entries = Vec::with_capacity(self.manifest.urls.len());
        for url in &self.manifest.urls {
            let resolved = self.resolve(url);
            let response = self
                .fetcher
                .fetch(&resolved)
                .await
                .map_err(|e| CacheError::InstallFailed(format!("{}: {}", resolved, e)))?;
            if !response.ok() {
                return Err(CacheError::InstallFailed(format!(
                    "{}: status {}",
                    resolved, response.status
                )));
            }
            entries.push(CachedEntry {
                meta: EntryMeta {
                    url: resolved,
                    status: response.status,
                    content_type: response.content_type,
                },
                body: response.body,
            });
        }

        // Every asset fetched; replace the bucket in one pass.
        self.store.delete_bucket(&self.manifest.version)?;
        for entry in &entries {
            if let Err(e) = self.store.put(&self.manifest.version, entry) {
                let _ = self.store.delete_bucket(&self.manifest.version);
                return Err(e);
            }
        }

        self.state = ControllerState::Waiting;
        info!(
            "cached {} assets under {}",
            entries.len(),
            self.manifest.version
        );
        Ok(())
    }

    /// Activates the current version: deletes every bucket whose name does
    /// not match the current version tag, then takes over serving.
    pub fn activate(&mut self) -> Result<(), CacheError> {
        for bucket in self.store.list_buckets()? {
            if bucket != self.manifest.version {
                info!("deleting old cache bucket {}", bucket);
                self.store.delete_bucket(&bucket)?;
            }
        }
        self.state = ControllerState::Active;
        info!("cache controller active for {}", self.manifest.version);
        Ok(())
    }

    /// Handles an external command from the application.
    pub fn handle_message(&mut self, message: ControllerMessage) -> Result<(), CacheError> {
        match message {
            // Activate immediately rather than waiting for open pages.
            ControllerMessage::SkipWaiting => self.activate(),
        }
    }

    /// Serves one request: cache lookup, then the decision table.
    pub async fn handle_request(&self, url: &str) -> Result<ServedResponse, CacheError> {
        let resolved = self.resolve(url);

        if let Some(entry) = self.store.get(&self.manifest.version, &resolved)? {
            debug!("cache hit: {}", resolved);
            return Ok(ServedResponse {
                url: resolved,
                status: entry.meta.status,
                content_type: entry.meta.content_type,
                body: entry.body,
                source: ServeSource::Cache,
            });
        }

        match self.fetcher.fetch(&resolved).await {
            Ok(response) => {
                let probe = NetworkProbe {
                    status: response.status,
                    same_origin: self.is_same_origin(&resolved),
                };
                if serve_plan(false, Some(probe)) == ServePlan::StoreAndServe {
                    // Best-effort fill; a store failure never fails the response.
                    let entry = CachedEntry {
                        meta: EntryMeta {
                            url: resolved.clone(),
                            status: response.status,
                            content_type: response.content_type.clone(),
                        },
                        body: response.body.clone(),
                    };
                    if let Err(e) = self.store.put(&self.manifest.version, &entry) {
                        warn!("cache fill failed for {}: {}", resolved, e);
                    }
                }
                Ok(ServedResponse {
                    url: resolved,
                    status: response.status,
                    content_type: response.content_type,
                    body: response.body,
                    source: ServeSource::Network,
                })
            }
            Err(e) => {
                debug!("network failed for {}: {}", resolved, e);
                if let Some(shell) = self.manifest.shell_url() {
                    let shell = self.resolve(shell);
                    if let Some(entry) = self.store.get(&self.manifest.version, &shell)? {
                        return Ok(ServedResponse {
                            url: shell,
                            status: entry.meta.status,
                            content_type: entry.meta.content_type,
                            body: entry.body,
                            source: ServeSource::OfflineShell,
                        });
                    }
                }
                Err(CacheError::Offline(resolved))
            }
        }
    }
}
