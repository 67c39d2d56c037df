//! `HttpFetcher` against a local HTTP server.

mod helpers;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use helpers::PROFESSOR_PAGE;
use profscrape::rmp::{HttpFetcher, PageFetcher, RmpScraper, ScrapeError};

/// Serve the fixture page on an ephemeral port and return the base URL.
async fn spawn_site() -> String {
    let app = Router::new()
        .route("/professor/2345", get(|| async { Html(PROFESSOR_PAGE) }))
        .route(
            "/professor/500",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Client that never routes loopback requests through a system proxy.
fn local_fetcher() -> HttpFetcher {
    HttpFetcher::from_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

#[tokio::test]
async fn fetches_page_body() {
    let base = spawn_site().await;
    let body = local_fetcher()
        .fetch_page(&format!("{base}/professor/2345"))
        .await
        .unwrap();
    assert_eq!(body, PROFESSOR_PAGE);
}

#[tokio::test]
async fn not_found_maps_to_fetch_error() {
    let base = spawn_site().await;
    let err = local_fetcher()
        .fetch_page(&format!("{base}/professor/404"))
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::Fetch { status: 404, ref reason } if reason == "Not Found"));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn server_error_maps_to_fetch_error() {
    let base = spawn_site().await;
    let client = reqwest::Client::builder()
        .no_proxy()
        .user_agent("profscrape-test")
        .build()
        .unwrap();
    let err = HttpFetcher::from_client(client)
        .fetch_page(&format!("{base}/professor/500"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn scrapes_over_http() {
    let base = spawn_site().await;
    let scraper = RmpScraper::with_base_url(local_fetcher(), &base);

    let result = scraper
        .scrape_professor_reviews(&format!("{base}/professor/2345"))
        .await
        .unwrap();

    assert_eq!(result.professor.name, "Jane Doe");
    assert_eq!(result.reviews.len(), 3);
    assert_eq!(
        result.professor.school.unwrap().rmp_url,
        format!("{base}/school/1516")
    );
}

#[tokio::test]
async fn scrape_of_missing_page_propagates_status() {
    let base = spawn_site().await;
    let scraper = RmpScraper::with_base_url(local_fetcher(), &base);

    let err = scraper
        .scrape_professor_reviews(&format!("{base}/professor/1"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}
