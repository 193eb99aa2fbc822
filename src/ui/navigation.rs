//! Page routes and the navigation seam.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// A storefront page the client can send the user to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// The landing page, `/`.
    Home,
    /// The login page, `/login`.
    Login,
    /// The search results page, `/search?q=<term>`.
    Search {
        /// The search term, not yet URL-encoded.
        query: String,
    },
}

impl Route {
    /// Builds a search route from raw user input.
    ///
    /// The term is lowercased. Returns `None` when the input is empty or
    /// whitespace only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_client::ui::Route;
    ///
    /// let route = Route::search("Red Shoes").unwrap();
    /// assert_eq!(route.path(), "/search?q=red%20shoes");
    /// assert!(Route::search("   ").is_none());
    /// ```
    #[must_use]
    pub fn search(input: &str) -> Option<Self> {
        let query = input.to_lowercase();
        if query.trim().is_empty() {
            return None;
        }
        Some(Self::Search { query })
    }

    /// Returns the URL path (and query string) for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Search { query } => format!("/search?q={}", encode_component(query)),
        }
    }
}

/// Percent-encodes a query value, leaving `!'()*` as they are.
fn encode_component(value: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for (escape, mark) in [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")] {
        encoded = encoded.replace(escape, mark);
    }
    encoded
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Performs page navigation on behalf of the storefront.
pub trait Navigator: Send + Sync {
    /// Sends the user to `route`.
    fn navigate(&self, route: Route);
}

/// A [`Navigator`] that logs each route to `tracing` and keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(%route, "navigate");
    }
}

/// A [`Navigator`] that records every navigation.
///
/// Clones share the same history. It grows with every navigation, so this
/// suits tests and short-lived hosts that poll the current route.
#[derive(Clone, Debug, Default)]
pub struct NavigationLog {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl NavigationLog {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every route navigated to so far, oldest first.
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent route.
    #[must_use]
    pub fn current(&self) -> Option<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "navigate");
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(
            Route::Search {
                query: "tea & cups".to_string()
            }
            .path(),
            "/search?q=tea%20%26%20cups"
        );
    }

    #[test]
    fn test_search_path_keeps_unreserved_marks() {
        assert_eq!(
            Route::search("it's (new)!").unwrap().path(),
            "/search?q=it's%20(new)!"
        );
        assert_eq!(Route::search("a*b~c").unwrap().path(), "/search?q=a*b~c");
        assert_eq!(Route::search("50%").unwrap().path(), "/search?q=50%25");
    }

    #[test]
    fn test_tracing_navigator_holds_no_state() {
        assert_eq!(std::mem::size_of::<TracingNavigator>(), 0);
        TracingNavigator.navigate(Route::Home);
    }

    #[test]
    fn test_search_rejects_blank_input() {
        assert!(Route::search("").is_none());
        assert!(Route::search("  \t ").is_none());
    }

    #[test]
    fn test_search_lowercases_but_keeps_spacing() {
        assert_eq!(
            Route::search(" Lamp "),
            Some(Route::Search {
                query: " lamp ".to_string()
            })
        );
    }

    #[test]
    fn test_navigation_log_tracks_current_route() {
        let log = NavigationLog::new();
        assert!(log.current().is_none());

        log.navigate(Route::Login);
        log.navigate(Route::Home);
        assert_eq!(log.routes(), vec![Route::Login, Route::Home]);
        assert_eq!(log.current(), Some(Route::Home));
    }
}
