mod common;

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = common::spawn_app().await;

    let response = reqwest::get(app.url("/unknown")).await.expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn request_id_is_propagated() {
    let app = common::spawn_app().await;

    let response = reqwest::get(app.url("/meals")).await.expect("Failed to execute request.");

    let request_id = response.headers().get("x-request-id").expect("missing x-request-id");
    assert_eq!(request_id.len(), 36, "expected a hyphenated UUID, got {request_id:?}");
}

#[tokio::test]
async fn supplied_request_id_is_kept() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.url("/health"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.headers()["x-request-id"], "trace-me");
}
