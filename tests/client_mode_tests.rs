//! End-to-end tests for the flattened client media type.
//!
//! Requests carrying `Accept: application/vnd.homecatalog.v2+json` get
//! the flat DTO shapes with aggregate counts instead of HAL documents.

use axum::http::header::ACCEPT;
use axum_test::TestServer;
use homecatalog::catalog::Catalog;
use homecatalog::config::ServerConfig;
use homecatalog::server::negotiate::CLIENT_JSON;
use homecatalog::server::{AppState, build_router};
use serde_json::{Value, json};

fn server() -> TestServer {
    let state = AppState::new(Catalog::in_memory(), &ServerConfig::default());
    TestServer::new(build_router(state).unwrap())
}

async fn create(server: &TestServer, path: &str, body: Value) {
    let response = server.post(path).json(&body).await;
    assert_eq!(response.status_code(), 201, "POST {path}");
}

async fn get_client(server: &TestServer, path: &str) -> Value {
    let response = server.get(path).add_header(ACCEPT, CLIENT_JSON).await;
    assert_eq!(response.status_code(), 200, "GET {path}");
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        CLIENT_JSON
    );
    response.json()
}

#[tokio::test]
async fn test_author_overview_counts_track_book_creation() {
    let server = server();

    create(&server, "/api/authors", json!({"name": "Frank Herbert"})).await;
    for name in ["Dune", "Dune Messiah", "Children of Dune"] {
        create(
            &server,
            "/api/books",
            json!({"name": name, "author": {"id": 1, "name": "Frank Herbert"}}),
        )
        .await;
    }

    let authors = get_client(&server, "/api/authors").await;
    let authors = authors.as_array().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["name"], "Frank Herbert");
    assert_eq!(authors[0]["noBooks"], 3);

    create(
        &server,
        "/api/books",
        json!({"name": "God Emperor of Dune", "author": {"id": 1, "name": "Frank Herbert"}}),
    )
    .await;

    let authors = get_client(&server, "/api/authors").await;
    assert_eq!(authors.as_array().unwrap()[0]["noBooks"], 4);
}

#[tokio::test]
async fn test_room_overview_counts_books_and_shelves() {
    let server = server();

    create(&server, "/api/rooms", json!({"name": "Study"})).await;
    create(
        &server,
        "/api/shelves",
        json!({"letter": "A", "number": 1, "room": {"id": 1, "name": "Study"}}),
    )
    .await;
    create(
        &server,
        "/api/shelves",
        json!({"letter": "A", "number": 2, "room": {"id": 1, "name": "Study"}}),
    )
    .await;
    create(
        &server,
        "/api/books",
        json!({
            "name": "Dune",
            "shelf": {"id": 1, "letter": "A", "number": 1, "room": {"id": 1, "name": "Study"}}
        }),
    )
    .await;

    let rooms = get_client(&server, "/api/rooms").await;
    let rooms = rooms.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["noBooks"], 1);
    assert_eq!(rooms[0]["noShelves"], 2);
}

#[tokio::test]
async fn test_status_type_and_publisher_overviews() {
    let server = server();

    create(&server, "/api/statustypes", json!({"name": "at home"})).await;
    create(&server, "/api/publishers", json!({"name": "Chilton"})).await;
    create(
        &server,
        "/api/books",
        json!({
            "name": "Dune",
            "publisher": {"id": 1, "name": "Chilton"},
            "status": {"comment": "", "statusType": {"id": 1, "name": "at home"}}
        }),
    )
    .await;

    let status_types = get_client(&server, "/api/statustypes").await;
    assert_eq!(status_types.as_array().unwrap()[0]["noBooks"], 1);

    let publishers = get_client(&server, "/api/publishers").await;
    assert_eq!(publishers.as_array().unwrap()[0]["noBooks"], 1);
}

#[tokio::test]
async fn test_overview_dtos_carry_no_links() {
    let server = server();

    create(&server, "/api/authors", json!({"name": "Frank Herbert"})).await;
    create(&server, "/api/publishers", json!({"name": "Chilton"})).await;
    create(&server, "/api/rooms", json!({"name": "Study"})).await;
    create(&server, "/api/statustypes", json!({"name": "at home"})).await;

    for path in [
        "/api/authors",
        "/api/publishers",
        "/api/rooms",
        "/api/statustypes",
    ] {
        let items = get_client(&server, path).await;
        let items = items.as_array().unwrap();
        assert_eq!(items.len(), 1, "GET {path}");
        assert!(
            items[0].get("_links").is_none(),
            "GET {path} item must be a bare DTO, got: {}",
            items[0]
        );
    }
}

#[tokio::test]
async fn test_unfiltered_shelves_are_a_bare_dto_list() {
    let server = server();

    create(&server, "/api/rooms", json!({"name": "Study"})).await;
    create(
        &server,
        "/api/shelves",
        json!({"letter": "C", "number": 3, "room": {"id": 1, "name": "Study"}}),
    )
    .await;

    let shelves = get_client(&server, "/api/shelves").await;
    let shelves = shelves.as_array().unwrap();
    assert_eq!(shelves.len(), 1);
    assert_eq!(shelves[0]["letter"], "C");
    assert_eq!(shelves[0]["number"], 3);
    assert_eq!(shelves[0]["room"]["name"], "Study");
    assert_eq!(shelves[0]["noBooks"], 0);
    assert!(shelves[0].get("_links").is_none());
}

#[tokio::test]
async fn test_books_in_client_mode_keep_nested_shape() {
    let server = server();

    create(
        &server,
        "/api/books",
        json!({"name": "Dune", "author": {"id": 1, "name": "Frank Herbert"}}),
    )
    .await;

    let books = get_client(&server, "/api/books").await;
    let books = books.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["name"], "Dune");
    assert_eq!(books[0]["author"]["name"], "Frank Herbert");
}

#[tokio::test]
async fn test_single_resource_in_client_mode_still_flat_json() {
    let server = server();
    create(&server, "/api/authors", json!({"name": "Frank Herbert"})).await;

    let author = get_client(&server, "/api/authors/1").await;
    assert_eq!(author["id"], 1);
    assert_eq!(author["name"], "Frank Herbert");
}

#[tokio::test]
async fn test_hal_is_the_default_without_accept_header() {
    let server = server();
    create(&server, "/api/authors", json!({"name": "Frank Herbert"})).await;

    let response = server.get("/api/authors").await;
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/hal+json"
    );
    let body: Value = response.json();
    assert!(body.get("_embedded").is_some());
}

#[tokio::test]
async fn test_cross_origin_requests_from_configured_client_are_allowed() {
    let server = server();

    let response = server
        .get("/api/authors")
        .add_header("origin", "http://localhost:4200")
        .await;
    assert_eq!(
        response.header("access-control-allow-origin").to_str().unwrap(),
        "http://localhost:4200"
    );
}
