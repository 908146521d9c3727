//! Navigation module: the router seam, the decision wrapper and the
//! drop-in adapter handed back to applications

mod enhanced;
mod navigator;
mod router;
mod url;

pub use enhanced::{destroy, enhance, get_instance, EnhancedRouter};
pub use navigator::{NewTabNavigator, Outcome};
pub use router::Router;
pub use url::{is_external_url, open_in_new_tab, resolve_route_url, ResolveError, ResolvedUrl};
