//! PokeAPI Client
//!
//! Thin wrapper over reqwest that checks the response cache before every
//! outbound request and stores every successful response body under its
//! request URL. Pagination state for the location listing lives here so
//! `map`/`mapb` can walk forward and backward.

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationEncounters, NamedResource, Page, Pokemon};

/// Cursor into the paginated location listing, updated from each
/// decoded page.
#[derive(Debug, Default)]
struct PageState {
    next: Option<String>,
    previous: Option<String>,
}

// == Api Client ==
/// Client for the remote creature catalog.
///
/// Owns the response cache; the process entry point constructs one
/// client and passes it by reference to the command layer.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    cache: Cache,
    base_url: String,
    pages: Mutex<PageState>,
}

impl ApiClient {
    // == Constructor ==
    /// Creates a client from configuration, starting the cache and its
    /// reaper. Must be called from within a tokio runtime.
    pub fn new(config: &Config) -> Self {
        Self::with_cache(Cache::new(config.cache_ttl), &config.base_url)
    }

    /// Creates a client around an existing cache, pointed at `base_url`
    /// (which must end with a slash).
    pub fn with_cache(cache: Cache, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            cache,
            base_url: base_url.to_string(),
            pages: Mutex::new(PageState::default()),
        }
    }

    // == Locations ==
    /// Fetches the next (or, with `back`, the previous) page of location
    /// areas and advances the pagination cursor.
    ///
    /// The first forward call starts at the beginning of the listing.
    /// Paging back before any forward page was fetched is an error.
    pub async fn locations(&self, back: bool) -> Result<Page<NamedResource>> {
        let url = if back {
            self.pages
                .lock()
                .previous
                .clone()
                .ok_or(PokedexError::NoPreviousPage)?
        } else {
            self.pages
                .lock()
                .next
                .clone()
                .unwrap_or_else(|| format!("{}location-area", self.base_url))
        };

        let body = self.fetch(&url).await?;
        let page: Page<NamedResource> = serde_json::from_slice(&body)?;

        let mut pages = self.pages.lock();
        pages.next = page.next.clone();
        pages.previous = page.previous.clone();
        drop(pages);

        Ok(page)
    }

    // == Location Encounters ==
    /// Fetches the creatures that can be encountered at `area`.
    pub async fn location_encounters(&self, area: &str) -> Result<LocationEncounters> {
        let url = format!("{}location-area/{}/", self.base_url, area);
        let body = self.fetch(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Pokemon Detail ==
    /// Fetches the full detail record for one creature.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}pokemon/{}", self.base_url, name);
        let body = self.fetch(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Fetch ==
    /// The cache seam: returns the cached body for `url` when present,
    /// otherwise performs the request, requires a success status, caches
    /// the raw body under the URL, and returns it.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(body);
        }
        debug!(url, "cache miss, requesting");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::ApiStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone());
        Ok(body)
    }

    // == Shutdown ==
    /// Stops the owned cache's reaper. Called once on REPL exit.
    pub async fn shutdown(&self) {
        self.cache.shutdown().await;
    }
}
