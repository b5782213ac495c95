mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use std::sync::Arc;
use tinylink::api::handlers::redirect_handler;
use tinylink::domain::click_worker::run_click_worker;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::MemoryLinkRepository;

fn make_server(state: tinylink::AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, _rx) = common::create_test_state();
    common::seed_link(&state, "redir01", "https://example.com/target").await;
    let server = make_server(state);

    let response = server.get("/redir01").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _rx) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/notfound1").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_deleted_link_not_found() {
    let (state, _rx) = common::create_test_state();
    common::seed_deleted_link(&state, "gone001", "https://example.com").await;
    let server = make_server(state);

    let response = server.get("/gone001").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_records_click() {
    let (state, mut rx) = common::create_test_state();
    common::seed_link(&state, "clickme1", "https://example.com").await;
    let server = make_server(state);

    let response = server.get("/clickme1").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);

    let click_event = rx.try_recv();
    assert!(click_event.is_ok());
    assert_eq!(click_event.unwrap().code, "clickme1");
}

#[tokio::test]
async fn test_redirect_survives_full_click_queue() {
    let repository: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new());
    // Capacity 1 and no consumer: the second event cannot be enqueued.
    let (state, _rx) = common::create_test_state_with(repository, 1);
    common::seed_link(&state, "busy001", "https://example.com").await;
    let server = make_server(state);

    server
        .get("/busy001")
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    // The click is dropped, the redirect still answers.
    let response = server.get("/busy001").await;
    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_click_worker_drains_queue() {
    let repository = Arc::new(MemoryLinkRepository::new());
    let worker_repo: Arc<dyn LinkRepository> = repository.clone();
    let (state, rx) = common::create_test_state_with(worker_repo.clone(), 100);
    common::seed_link(&state, "drained1", "https://example.com").await;

    let worker = tokio::spawn(run_click_worker(rx, worker_repo));

    let server = make_server(state.clone());
    for _ in 0..3 {
        server
            .get("/drained1")
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    // Closing every sender lets the worker drain and exit.
    drop(server);
    drop(state);
    worker.await.unwrap();

    let link = repository.find_by_code("drained1").await.unwrap().unwrap();
    assert_eq!(link.click_count, 3);
    assert!(link.last_clicked_at.is_some());
}
