use crate::common::{TestApp, routes};
use serde_json::json;
use server::entity::{link, status, user};

#[tokio::test]
async fn demo_content_is_seeded_once() {
    let app = TestApp::spawn().await;

    server::seed::seed_demo_content(&app.db).await.unwrap();
    server::seed::seed_demo_content(&app.db).await.unwrap();

    assert_eq!(app.count(user::Entity).await, 2);
    assert_eq!(app.count(status::Entity).await, 6);
    assert_eq!(app.count(link::Entity).await, 4);
}

#[tokio::test]
async fn demo_content_is_skipped_when_users_exist() {
    let app = TestApp::spawn().await;
    app.create_authenticated_user("someone@example.com", "secret1")
        .await;

    server::seed::seed_demo_content(&app.db).await.unwrap();

    assert_eq!(app.count(user::Entity).await, 1);
    assert_eq!(app.count(status::Entity).await, 0);
}

#[tokio::test]
async fn demo_content_is_back_dated_and_usable() {
    let app = TestApp::spawn().await;
    server::seed::seed_demo_content(&app.db).await.unwrap();

    let res = app.get_without_token(routes::HOME).await;
    assert_eq!(res.status, 200, "Response: {}", res.text);

    let statuses = res.body["statuses"].as_array().unwrap();
    assert_eq!(statuses[0]["content"], "Test status with some content");
    assert_eq!(statuses[0]["author_email"], "fred@example.com");
    assert_eq!(
        statuses[5]["content"],
        "Vague and inspiring quotation or somesuch"
    );
    assert_eq!(res.body["links"][0]["title"], "General Assembly");

    let login = app
        .post_without_token(
            routes::LOGIN,
            &json!({"email": "fred@example.com", "password": "password"}),
        )
        .await;
    assert_eq!(login.status, 200, "Response: {}", login.text);
}
