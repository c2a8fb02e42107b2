use crate::common::{TestApp, routes};
use serde_json::json;

#[tokio::test]
async fn empty_feed() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(routes::HOME).await;

    assert_eq!(res.status, 200, "Response: {}", res.text);
    assert_eq!(res.body, json!({"statuses": [], "links": []}));
}

#[tokio::test]
async fn feed_lists_newest_first_with_counts() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let george = app
        .create_authenticated_user("george@example.com", "secret1")
        .await;

    let older = app.create_status(&fred, "Older").await;
    let newer = app.create_status(&george, "Newer").await;
    let link_id = app.create_link(&fred, "http://example.com", "Example").await;

    app.create_comment(&routes::status_comments(older), &george, "One")
        .await;
    app.create_comment(&routes::status_comments(older), &fred, "Two")
        .await;
    app.create_like(&json!({"status_id": older}), &george).await;
    app.create_like(&json!({"link_id": link_id}), &george).await;

    let res = app.get_without_token(routes::HOME).await;
    assert_eq!(res.status, 200, "Response: {}", res.text);

    let statuses = res.body["statuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0]["id"], newer);
    assert_eq!(statuses[0]["author_email"], "george@example.com");
    assert_eq!(statuses[0]["comment_count"], 0);
    assert_eq!(statuses[1]["id"], older);
    assert_eq!(statuses[1]["author_email"], "fred@example.com");
    assert_eq!(statuses[1]["comment_count"], 2);
    assert_eq!(statuses[1]["like_count"], 1);

    let links = res.body["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["title"], "Example");
    assert_eq!(links[0]["comment_count"], 0);
    assert_eq!(links[0]["like_count"], 1);
}

#[tokio::test]
async fn root_serves_the_feed() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    app.create_status(&fred, "Visible on the front page").await;

    let res = app.get_without_token(routes::ROOT).await;

    assert_eq!(res.status, 200, "Response: {}", res.text);
    assert_eq!(
        res.body["statuses"][0]["content"],
        "Visible on the front page"
    );
}
