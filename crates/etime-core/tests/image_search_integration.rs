//! Integration tests for the remote image search against a mock endpoint.

use etime_core::ImageSearch;

#[tokio::test]
async fn maps_results_to_sized_regular_urls() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"urls": {"regular": "https://images.unsplash.com/photo-1?q=85"}},
                {"urls": {"regular": "https://images.unsplash.com/photo-2?q=85"}}
            ]"#,
        )
        .create_async()
        .await;

    let search = ImageSearch::with_endpoint(format!("{}/search", server.url()));
    let urls = search.fetch().await;

    mock.assert_async().await;
    assert_eq!(
        urls,
        vec![
            "https://images.unsplash.com/photo-1?q=85&w=1920&q=80".to_string(),
            "https://images.unsplash.com/photo-2?q=85&w=1920&q=80".to_string(),
        ]
    );
}

#[tokio::test]
async fn non_array_response_yields_no_results() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors": ["Rate Limit Exceeded"]}"#)
        .create_async()
        .await;

    let search = ImageSearch::with_endpoint(format!("{}/search", server.url()));
    assert!(search.fetch().await.is_empty());
}

#[tokio::test]
async fn results_missing_urls_are_skipped() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": "abc"}, {"urls": {"regular": "https://x.com/p"}}]"#)
        .create_async()
        .await;

    let search = ImageSearch::with_endpoint(format!("{}/search", server.url()));
    let urls = search.fetch().await;
    assert_eq!(urls, vec!["https://x.com/p&w=1920&q=80".to_string()]);
}

#[tokio::test]
async fn network_failure_yields_no_results() {
    // Nothing listens on this port.
    let search = ImageSearch::with_endpoint("http://127.0.0.1:1/search");
    assert!(search.fetch().await.is_empty());
}
