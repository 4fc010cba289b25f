//! The UI-facing data-access service with the fallback-on-failure policy.
//!
//! # Design
//! `DataService` glues four pieces together: a `HeroApi` for request
//! construction and response parsing, a `Transport` for the actual
//! round-trip, a `MessageLog` for user-visible feedback, and a
//! `TextResolver` for the wording of that feedback.
//!
//! Every operation exists twice. The private `try_*` methods return
//! `Result<_, ApiError>` and are the honest, typed API. The public methods
//! are a thin adapter over them that never fails: on any error they emit the
//! raw error on the tracing channel, append a single "operation failed" line
//! to the log, and resolve with the operation's fallback value. This
//! swallow-and-continue policy keeps a demo UI running through backend
//! outages; it is not a pattern to lift into a production data layer, which
//! is exactly why the typed `try_*` layer exists underneath.

use crate::client::HeroApi;
use crate::error::ApiError;
use crate::http::{HttpResponse, Transport};
use crate::log::MessageLog;
use crate::texts::{keys, TextResolver};
use crate::types::{Hero, HeroTarget};

/// Issues hero CRUD requests and degrades gracefully on failure.
///
/// All methods take `&self`; the service holds no per-request state and any
/// number of calls may be in flight at once. The only shared mutable piece
/// is the injected `MessageLog`.
#[derive(Debug)]
pub struct DataService<T> {
    api: HeroApi,
    transport: T,
    log: MessageLog,
    texts: TextResolver,
}

impl<T: Transport> DataService<T> {
    pub fn new(base_url: &str, transport: T, log: MessageLog, texts: TextResolver) -> Self {
        Self {
            api: HeroApi::new(base_url),
            transport,
            log,
            texts,
        }
    }

    /// GET all heroes. Falls back to an empty list.
    pub async fn list_all(&self) -> Vec<Hero> {
        match self.try_list_all().await {
            Ok(heroes) => {
                self.log.add(self.texts.resolve(keys::FETCHED_HEROES));
                heroes
            }
            Err(error) => self.recover("list_all", error, Vec::new()),
        }
    }

    /// GET one hero via the `?id=` collection filter. A miss comes back as
    /// an empty array and resolves to `None` without touching the failure
    /// path; only transport/status problems do.
    pub async fn get_optional(&self, id: u64) -> Option<Hero> {
        match self.try_get_optional(id).await {
            Ok(found) => {
                let outcome = if found.is_some() {
                    self.texts.resolve(keys::FETCHED)
                } else {
                    self.texts.resolve(keys::DID_NOT_FIND)
                };
                let hero = self.texts.resolve(keys::HERO);
                self.log.add(format!("{outcome} {hero} id={id}"));
                found
            }
            Err(error) => self.recover(&format!("get_optional id={id}"), error, None),
        }
    }

    /// GET one hero via the per-id path. A miss is a 404 here and is routed
    /// through the failure path, falling back to `None`.
    pub async fn get_by_id(&self, id: u64) -> Option<Hero> {
        match self.try_get_by_id(id).await {
            Ok(hero) => {
                let fetched = self.texts.resolve(keys::FETCHED_HERO);
                self.log.add(format!("{fetched} id={id}"));
                Some(hero)
            }
            Err(error) => self.recover(&format!("get_by_id id={id}"), error, None),
        }
    }

    /// GET heroes whose name contains `term`. A blank term short-circuits
    /// to an empty list without contacting the backend or logging.
    pub async fn search(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        match self.try_search(term).await {
            Ok(heroes) => {
                let found = self.texts.resolve(keys::FOUND_HEROES_MATCHING);
                self.log.add(format!("{found} {term}"));
                heroes
            }
            Err(error) => self.recover("search", error, Vec::new()),
        }
    }

    /// POST a new hero. When the caller reports an empty collection the
    /// payload id is forced to 1 — a fixture-only convenience carried over
    /// from the reference UI, not a correctness guarantee; the backend
    /// remains authoritative for the id it stores.
    pub async fn create(&self, mut hero: Hero, current_count: usize) -> Option<Hero> {
        if current_count == 0 {
            hero.id = 1;
        }
        match self.try_create(&hero).await {
            Ok(created) => {
                let added = self.texts.resolve(keys::ADDED_HERO);
                self.log.add(format!("{added} id={}", created.id));
                Some(created)
            }
            Err(error) => self.recover("create", error, None),
        }
    }

    /// DELETE a hero, addressed by a full `Hero` or a bare id.
    pub async fn remove(&self, target: impl Into<HeroTarget>) -> Option<Hero> {
        let id = target.into().id();
        match self.try_remove(id).await {
            Ok(removed) => {
                let deleted = self.texts.resolve(keys::DELETED_HERO);
                self.log.add(format!("{deleted} id={id}"));
                removed
            }
            Err(error) => self.recover("remove", error, None),
        }
    }

    /// PUT the full hero against the collection path. The response shape is
    /// unspecified by the contract, so success hands back raw JSON.
    pub async fn update(&self, hero: &Hero) -> Option<serde_json::Value> {
        match self.try_update(hero).await {
            Ok(value) => {
                let updated = self.texts.resolve(keys::UPDATED_HERO);
                self.log.add(format!("{updated} id={}", hero.id));
                Some(value)
            }
            Err(error) => self.recover("update", error, None),
        }
    }

    async fn try_list_all(&self) -> Result<Vec<Hero>, ApiError> {
        let response = self.execute(self.api.build_list_all()).await?;
        self.api.parse_list_all(response)
    }

    async fn try_get_optional(&self, id: u64) -> Result<Option<Hero>, ApiError> {
        let response = self.execute(self.api.build_get_optional(id)).await?;
        self.api.parse_get_optional(response)
    }

    async fn try_get_by_id(&self, id: u64) -> Result<Hero, ApiError> {
        let response = self.execute(self.api.build_get_by_id(id)).await?;
        self.api.parse_get_by_id(response)
    }

    async fn try_search(&self, term: &str) -> Result<Vec<Hero>, ApiError> {
        let response = self.execute(self.api.build_search(term)).await?;
        self.api.parse_search(response)
    }

    async fn try_create(&self, hero: &Hero) -> Result<Hero, ApiError> {
        let response = self.execute(self.api.build_create(hero)?).await?;
        self.api.parse_create(response)
    }

    async fn try_remove(&self, id: u64) -> Result<Option<Hero>, ApiError> {
        let response = self.execute(self.api.build_remove(id)).await?;
        self.api.parse_remove(response)
    }

    async fn try_update(&self, hero: &Hero) -> Result<serde_json::Value, ApiError> {
        let response = self.execute(self.api.build_update(hero)?).await?;
        self.api.parse_update(response)
    }

    async fn execute(&self, request: crate::http::HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.execute(request).await
    }

    /// The single recovery routine every operation funnels failures through:
    /// raw error to the diagnostic channel, one human-readable line to the
    /// log, and the fallback value to the caller.
    fn recover<V>(&self, operation: &str, error: ApiError, fallback: V) -> V {
        // TODO: forward the raw error to a remote telemetry sink once one exists.
        tracing::error!(operation, error = %error, "hero request failed");
        let failed = self.texts.resolve(keys::FAILED);
        self.log.add(format!("{operation} {failed} {error}"));
        fallback
    }
}
