//! URL resolution and the new-tab side effect

use tracing::warn;

use crate::logging::LOG_TARGET;
use crate::platform::{Platform, NEW_TAB_FEATURES};

use super::router::Router;

/// Prefixes that mark a resolved href as pointing off-site
const EXTERNAL_PREFIXES: [&str; 3] = ["http://", "https://", "//"];

/// A destination resolved through the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub href: String,
    pub is_external: bool,
}

/// Whether `href` carries a network scheme or is protocol-relative
pub fn is_external_url(href: &str) -> bool {
    EXTERNAL_PREFIXES.iter().any(|prefix| href.starts_with(prefix))
}

/// Resolve `to` to an href with the router's own resolver
pub fn resolve_route_url<R: Router + ?Sized>(
    router: &R,
    to: &R::Location,
) -> Result<ResolvedUrl, ResolveError> {
    let href = router.resolve(to)?;
    let is_external = is_external_url(&href);
    Ok(ResolvedUrl { href, is_external })
}

/// Open `url` with no opener and no referrer
///
/// Failures (a blocked popup, usually) are logged and swallowed. Outside a
/// browser the primitive is not called at all.
pub fn open_in_new_tab<P: Platform + ?Sized>(
    platform: &P,
    url: &str,
    target: &str,
) -> Option<P::Window> {
    if !platform.is_browser() {
        return None;
    }

    match platform.open_window(url, target, NEW_TAB_FEATURES) {
        Ok(window) => window,
        Err(e) => {
            warn!(target: LOG_TARGET, error = %e, url, "failed to open new tab");
            None
        }
    }
}

/// Errors raised by a router's resolver
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no route matches {0}")]
    NoMatch(String),

    #[error("missing required param {param} for route {route}")]
    MissingParam { route: String, param: String },

    #[error("invalid route location: {0}")]
    Invalid(String),
}
