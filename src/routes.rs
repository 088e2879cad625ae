//! In-memory route table shared by all connections.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Content served for a registered path.
#[derive(Debug, Clone)]
pub struct Route {
    /// Response body, written as UTF-8 bytes
    pub content: String,
    /// Value of the Content-Type response header
    pub content_type: String,
}

/// Mapping from exact request path to response content.
///
/// Cloning the table is cheap and yields a handle to the same underlying map,
/// so one table can be shared between the accept loop and route-management
/// code. Lookups from in-flight requests are safe while registrations happen
/// concurrently.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Arc<RwLock<HashMap<String, Route>>>,
}

/// Registered paths always start with '/'; incoming request paths already do.
fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

impl RouteTable {
    /// Creates a table with the default route: `/` serving "Hello, World!".
    pub fn new() -> Self {
        let mut routes = HashMap::new();
        routes.insert(
            "/".to_string(),
            Route {
                content: "Hello, World!".to_string(),
                content_type: "text/plain".to_string(),
            },
        );

        Self {
            routes: Arc::new(RwLock::new(routes)),
        }
    }

    /// Stores or overwrites the route for `path`. Last write wins.
    ///
    /// A missing leading '/' is added, so `register("about", ..)` serves
    /// requests for `/about`.
    pub async fn register(
        &self,
        path: &str,
        content: impl Into<String>,
        content_type: impl Into<String>,
    ) {
        let mut routes = self.routes.write().await;
        routes.insert(
            normalize(path),
            Route {
                content: content.into(),
                content_type: content_type.into(),
            },
        );
    }

    /// Removes the route for `path` if present; no-op otherwise.
    pub async fn unregister(&self, path: &str) {
        let mut routes = self.routes.write().await;
        routes.remove(&normalize(path));
    }

    /// Exact-string lookup on the raw requested path.
    ///
    /// No parameters, query strings, or wildcards: `/about?x=1` only matches
    /// a route registered under that literal string.
    pub async fn lookup(&self, path: &str) -> Option<Route> {
        let routes = self.routes.read().await;
        routes.get(path).cloned()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
