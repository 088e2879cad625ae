//! Tests for route registration and lookup

use waypoint::routes::RouteTable;

#[tokio::test]
async fn test_default_root_route() {
    let table = RouteTable::new();

    let route = table.lookup("/").await.unwrap();
    assert_eq!(route.content, "Hello, World!");
    assert_eq!(route.content_type, "text/plain");
}

#[tokio::test]
async fn test_register_and_lookup() {
    let table = RouteTable::new();
    table.register("/about", "<h1>Hi</h1>", "text/html").await;

    let route = table.lookup("/about").await.unwrap();
    assert_eq!(route.content, "<h1>Hi</h1>");
    assert_eq!(route.content_type, "text/html");
}

#[tokio::test]
async fn test_register_normalizes_missing_leading_slash() {
    let table = RouteTable::new();
    table.register("about", "<h1>Hi</h1>", "text/html").await;

    assert!(table.lookup("/about").await.is_some());
    // Lookup uses the raw path, so the unprefixed form does not match
    assert!(table.lookup("about").await.is_none());
}

#[tokio::test]
async fn test_register_last_write_wins() {
    let table = RouteTable::new();
    table.register("/page", "first", "text/plain").await;
    table.register("/page", "second", "text/html").await;

    let route = table.lookup("/page").await.unwrap();
    assert_eq!(route.content, "second");
    assert_eq!(route.content_type, "text/html");
}

#[tokio::test]
async fn test_default_route_can_be_overwritten() {
    let table = RouteTable::new();
    table.register("/", "custom root", "text/html").await;

    let route = table.lookup("/").await.unwrap();
    assert_eq!(route.content, "custom root");
}

#[tokio::test]
async fn test_unregister_restores_not_found() {
    let table = RouteTable::new();
    table.register("/about", "<h1>Hi</h1>", "text/html").await;
    assert!(table.lookup("/about").await.is_some());

    table.unregister("/about").await;
    assert!(table.lookup("/about").await.is_none());
}

#[tokio::test]
async fn test_unregister_uses_same_normalization() {
    let table = RouteTable::new();
    table.register("about", "<h1>Hi</h1>", "text/html").await;

    table.unregister("about").await;
    assert!(table.lookup("/about").await.is_none());
}

#[tokio::test]
async fn test_unregister_missing_path_is_noop() {
    let table = RouteTable::new();
    table.unregister("/never-registered").await;

    // Default route untouched
    assert!(table.lookup("/").await.is_some());
}

#[tokio::test]
async fn test_lookup_is_exact_match() {
    let table = RouteTable::new();
    table.register("/about", "<h1>Hi</h1>", "text/html").await;

    assert!(table.lookup("/about?x=1").await.is_none());
    assert!(table.lookup("/About").await.is_none());
    assert!(table.lookup("/about/").await.is_none());
}

#[tokio::test]
async fn test_clone_shares_underlying_table() {
    let table = RouteTable::new();
    let handle = table.clone();

    handle.register("/shared", "content", "text/plain").await;
    assert!(table.lookup("/shared").await.is_some());
}
