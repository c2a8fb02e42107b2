use crate::common::{TestApp, routes};
use sea_orm::EntityTrait;
use serde_json::json;
use server::entity::{comment, like, status};

#[tokio::test]
async fn create_status_belongs_to_creator() {
    let app = TestApp::spawn().await;
    let token = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let user_id = app.user_id(&token).await;

    let res = app
        .post_with_token(
            routes::STATUSES,
            &json!({"content": "Test status with some content"}),
            &token,
        )
        .await;

    assert_eq!(res.status, 201, "Response: {}", res.text);
    assert_eq!(res.body["content"], "Test status with some content");
    assert_eq!(res.body["user_id"], user_id);

    let stored = status::Entity::find_by_id(res.id())
        .one(&app.db)
        .await
        .unwrap()
        .expect("status should be persisted");
    assert_eq!(stored.user_id, user_id);
}

#[tokio::test]
async fn create_status_requires_authentication() {
    let app = TestApp::spawn().await;

    let res = app
        .post_without_token(routes::STATUSES, &json!({"content": "Anonymous"}))
        .await;

    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_MISSING");
    assert_eq!(app.count(status::Entity).await, 0);
}

#[tokio::test]
async fn blank_content_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;

    for body in [json!({"content": ""}), json!({"content": "   "}), json!({})] {
        let res = app.post_with_token(routes::STATUSES, &body, &token).await;
        assert_eq!(res.status, 400, "Body {body}: {}", res.text);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["message"], "Content can't be blank");
    }

    assert_eq!(app.count(status::Entity).await, 0);
}

#[tokio::test]
async fn new_status_returns_empty_draft() {
    let app = TestApp::spawn().await;
    let token = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;

    let res = app.get_with_token(routes::NEW_STATUS, &token).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!({"content": ""}));

    let res = app.get_without_token(routes::NEW_STATUS).await;
    assert_eq!(res.status, 401);
}

#[tokio::test]
async fn get_status_includes_engagements() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let george = app
        .create_authenticated_user("george@example.com", "secret1")
        .await;

    let id = app.create_status(&fred, "Hello").await;
    app.create_comment(&routes::status_comments(id), &george, "First")
        .await;
    app.create_comment(&routes::status_comments(id), &fred, "Second")
        .await;
    app.create_like(&json!({"status_id": id}), &george).await;

    let res = app.get_without_token(&routes::status(id)).await;

    assert_eq!(res.status, 200, "Response: {}", res.text);
    assert_eq!(res.body["content"], "Hello");
    assert_eq!(res.body["author_email"], "fred@example.com");
    let comments = res.body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "First");
    assert_eq!(comments[1]["content"], "Second");
    assert_eq!(comments[0]["target_type"], "status");
    assert_eq!(comments[0]["target_id"], id);
    assert_eq!(res.body["likes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_missing_status_returns_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(&routes::status(99999)).await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn only_author_can_delete_status() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let george = app
        .create_authenticated_user("george@example.com", "secret1")
        .await;
    let id = app.create_status(&fred, "Mine").await;

    let res = app.delete_with_token(&routes::status(id), &george).await;
    assert_eq!(res.status, 403);
    assert_eq!(res.body["code"], "PERMISSION_DENIED");
    assert_eq!(app.count(status::Entity).await, 1);

    let res = app.delete_without_token(&routes::status(id)).await;
    assert_eq!(res.status, 401);
}

#[tokio::test]
async fn deleting_status_removes_its_comments_and_likes() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let george = app
        .create_authenticated_user("george@example.com", "secret1")
        .await;

    let doomed = app.create_status(&fred, "Going away").await;
    let kept = app.create_status(&fred, "Staying").await;
    for id in [doomed, kept] {
        app.create_comment(&routes::status_comments(id), &george, "Hi")
            .await;
        app.create_like(&json!({"status_id": id}), &george).await;
    }

    let res = app.delete_with_token(&routes::status(doomed), &fred).await;
    assert_eq!(res.status, 204, "Response: {}", res.text);

    let res = app.get_without_token(&routes::status(doomed)).await;
    assert_eq!(res.status, 404);

    assert_eq!(app.count(comment::Entity).await, 1);
    assert_eq!(app.count(like::Entity).await, 1);
    let remaining = like::Entity::find().all(&app.db).await.unwrap();
    assert_eq!(remaining[0].likeable_id, kept);
}
