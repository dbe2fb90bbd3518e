use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use book_catalog::{
    create_router, open_in_memory, seed_if_empty, AppState, BookStore, NewBook, SqliteBookStore,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_app() -> (Router, Arc<dyn BookStore>) {
    let store: Arc<dyn BookStore> = Arc::new(SqliteBookStore::new(open_in_memory().unwrap()));
    let router = create_router(AppState::new(store.clone()));
    (router, store)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(router: &Router, uri: &str, body: &str) -> axum::response::Response {
    router
        .clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn assert_redirects_to_list(response: &axum::response::Response) {
    assert!(response.status().is_redirection(), "{}", response.status());
    assert_eq!(response.headers()[header::LOCATION], "/books");
}

fn assert_html(response: &axum::response::Response) {
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"), "{content_type}");
}

async fn send(router: &Router, request: Request<Body>) -> axum::response::Response {
    router.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn home_page_is_html() {
    let (router, _) = test_app();

    let response = send(&router, Request::get("/").body(Body::empty()).unwrap()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_html(&response);
}

#[tokio::test]
async fn list_shows_seeded_books() {
    let (router, store) = test_app();
    seed_if_empty(store.as_ref()).unwrap();

    let (status, body) = get(&router, "/books").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Odyssey"));
    assert!(body.contains("J.R.R. Tolkien"));
}

#[tokio::test]
async fn add_form_renders() {
    let (router, _) = test_app();

    let (status, body) = get(&router, "/add").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<form method=\"post\" action=\"/add\">"));
}

#[tokio::test]
async fn adding_a_book_redirects_and_lists_it() {
    let (router, store) = test_app();

    let response = post_form(
        &router,
        "/add",
        "title=Dune&author=Frank+Herbert&published_year=1965",
    )
    .await;

    assert_redirects_to_list(&response);
    let books = store.list().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(
        books[0],
        NewBook::new("Dune", "Frank Herbert", Some(1965)).with_id(books[0].id)
    );

    let (_, body) = get(&router, "/books").await;
    assert!(body.contains("Dune"));
}

#[tokio::test]
async fn non_numeric_year_is_stored_as_absent() {
    let (router, store) = test_app();

    let response = post_form(
        &router,
        "/add",
        "title=Beowulf&author=Unknown&published_year=long+ago",
    )
    .await;

    assert_redirects_to_list(&response);
    assert_eq!(store.list().unwrap()[0].published_year, None);
}

#[tokio::test]
async fn missing_title_is_a_bad_request() {
    let (router, store) = test_app();

    let response = post_form(&router, "/add", "author=Homer").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn detail_shows_the_book() {
    let (router, store) = test_app();
    let id = store
        .create(&NewBook::new("The Odyssey", "Homer", Some(-750)))
        .unwrap();

    let (status, body) = get(&router, &format!("/book/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>The Odyssey</h1>"));
    assert!(body.contains("750 BC"));
}

#[tokio::test]
async fn detail_for_unknown_id_is_404() {
    let (router, _) = test_app();

    let (status, body) = get(&router, "/book/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Not Found"));
}

#[tokio::test]
async fn non_integer_id_is_404() {
    let (router, _) = test_app();

    let (status, _) = get(&router, "/book/abc").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (router, _) = test_app();

    let (status, _) = get(&router, "/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_form_is_prefilled() {
    let (router, store) = test_app();
    let id = store
        .create(&NewBook::new("Hamlet", "William Shakespeare", Some(1603)))
        .unwrap();

    let (status, body) = get(&router, &format!("/edit/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("value=\"Hamlet\""));
    assert!(body.contains("value=\"1603\""));
}

#[tokio::test]
async fn editing_updates_and_redirects() {
    let (router, store) = test_app();
    let id = store
        .create(&NewBook::new("Hamlet", "Shakespeare", None))
        .unwrap();

    let response = post_form(
        &router,
        &format!("/edit/{id}"),
        "title=Hamlet&author=William+Shakespeare&published_year=1603",
    )
    .await;

    assert_redirects_to_list(&response);
    assert_eq!(
        store.get(id).unwrap(),
        NewBook::new("Hamlet", "William Shakespeare", Some(1603)).with_id(id)
    );
}

#[tokio::test]
async fn editing_unknown_id_is_404() {
    let (router, _) = test_app();

    let (status, _) = get(&router, "/edit/77").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let response = post_form(&router, "/edit/77", "title=A&author=B").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_asks_for_confirmation_before_removing() {
    let (router, store) = test_app();
    let id = store
        .create(&NewBook::new("Moby-Dick", "Herman Melville", Some(1851)))
        .unwrap();

    let (status, body) = get(&router, &format!("/delete/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(&format!("action=\"/delete/{id}\"")));
    assert!(store.get(id).is_ok());

    let response = post_form(&router, &format!("/delete/{id}"), "").await;
    assert_redirects_to_list(&response);
    assert!(store.get(id).is_err());

    let (status, _) = get(&router, &format!("/book/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_unknown_id_is_404() {
    let (router, _) = test_app();

    let (status, _) = get(&router, "/delete/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let response = post_form(&router, "/delete/5", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_page_is_served_as_html() {
    let (router, store) = test_app();
    let id = store
        .create(&NewBook::new("The Hobbit", "J.R.R. Tolkien", Some(1937)))
        .unwrap();

    let uris = [
        "/".to_string(),
        "/books".to_string(),
        "/add".to_string(),
        format!("/book/{id}"),
        format!("/edit/{id}"),
        format!("/delete/{id}"),
        "/book/9999".to_string(),
        "/nowhere".to_string(),
    ];
    for uri in uris {
        let request = Request::get(uri.as_str()).body(Body::empty()).unwrap();
        let response = send(&router, request).await;
        assert_html(&response);
    }
}

#[tokio::test]
async fn submitted_text_is_stored_verbatim() {
    let (router, store) = test_app();

    let response = post_form(
        &router,
        "/add",
        "title=+Dune++&author=%09Frank+Herbert&published_year=1965",
    )
    .await;

    assert_redirects_to_list(&response);
    let book = &store.list().unwrap()[0];
    assert_eq!(book.title, " Dune  ");
    assert_eq!(book.author, "\tFrank Herbert");
    assert_eq!(book.published_year, Some(1965));
}

#[tokio::test]
async fn editing_with_blank_title_is_rejected_and_keeps_the_row() {
    let (router, store) = test_app();
    let original = NewBook::new("Hamlet", "William Shakespeare", Some(1603));
    let id = store.create(&original).unwrap();

    let response = post_form(
        &router,
        &format!("/edit/{id}"),
        "title=+++&author=Someone+Else&published_year=2000",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_html(&response);
    assert_eq!(store.get(id).unwrap(), original.with_id(id));
}

#[tokio::test]
async fn non_form_body_is_an_html_bad_request() {
    let (router, store) = test_app();

    let response = send(
        &router,
        Request::post("/add")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("title=Dune&author=Frank+Herbert"))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_html(&response);
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn unsupported_method_is_an_html_405() {
    let (router, _) = test_app();

    let request = Request::delete("/books").body(Body::empty()).unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_html(&response);
}
