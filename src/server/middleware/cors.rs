//! Cross-origin access for the community web apps.
//!
//! Outside production every origin is allowed. In production an origin is allowed when
//! it is a `trypaladin.com` subdomain or the custom domain of a community. Community
//! domains are read from the database at most once an hour.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    request::Parts,
    HeaderName, HeaderValue, Method,
};
use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;
use tower_http::cors::{AllowOrigin, CorsLayer};
use url::Url;

use crate::server::{
    data::community::CommunityRepository,
    middleware::auth::{COMMUNITY_ID_HEADER, USER_ID_HEADER},
};

const DOMAIN_CACHE_TTL: Duration = Duration::from_secs(60 * 60);
const PALADIN_DOMAIN_SUFFIX: &str = ".trypaladin.com";

/// Community domains, refreshed when older than an hour.
pub struct DomainCache {
    db: DatabaseConnection,
    cached: RwLock<Option<(Instant, Arc<Vec<String>>)>>,
}

impl DomainCache {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            cached: RwLock::new(None),
        }
    }

    /// Gets the cached domains, reloading them once they expire.
    ///
    /// A failed reload keeps serving the previous list (empty before the first load).
    pub async fn domains(&self) -> Arc<Vec<String>> {
        if let Some((loaded_at, domains)) = self.cached.read().await.as_ref() {
            if loaded_at.elapsed() < DOMAIN_CACHE_TTL {
                return domains.clone();
            }
        }

        let mut cached = self.cached.write().await;
        if let Some((loaded_at, domains)) = cached.as_ref() {
            if loaded_at.elapsed() < DOMAIN_CACHE_TTL {
                return domains.clone();
            }
        }

        match CommunityRepository::new(&self.db).get_domains().await {
            Ok(domains) => {
                let domains = Arc::new(domains);
                *cached = Some((Instant::now(), domains.clone()));
                domains
            }
            Err(e) => {
                tracing::warn!("Failed to load community domains for CORS: {}", e);
                cached
                    .as_ref()
                    .map(|(_, domains)| domains.clone())
                    .unwrap_or_default()
            }
        }
    }
}

/// Whether a production request from `origin` may be answered.
///
/// Requests without an origin are not cross-origin and always pass. Only community
/// domains containing a dot are matched, which rules out bare placeholder domains.
pub fn is_allowed_origin(origin: Option<&str>, community_domains: &[String]) -> bool {
    let Some(origin) = origin else {
        return true;
    };

    let Some(host) = Url::parse(origin)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
    else {
        return false;
    };

    host.ends_with(PALADIN_DOMAIN_SUFFIX)
        || community_domains
            .iter()
            .any(|domain| domain.contains('.') && domain.eq_ignore_ascii_case(&host))
}

/// Builds the CORS layer for the router.
pub fn cors_layer(db: DatabaseConnection, is_production: bool) -> CorsLayer {
    let allow_origin = if is_production {
        let cache = Arc::new(DomainCache::new(db));

        AllowOrigin::async_predicate(move |origin: HeaderValue, _parts: &Parts| {
            let cache = cache.clone();
            async move {
                let domains = cache.domains().await;
                is_allowed_origin(origin.to_str().ok(), &domains)
            }
        })
    } else {
        AllowOrigin::mirror_request()
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static(COMMUNITY_ID_HEADER),
            HeaderName::from_static(USER_ID_HEADER),
        ])
        .max_age(DOMAIN_CACHE_TTL)
}
