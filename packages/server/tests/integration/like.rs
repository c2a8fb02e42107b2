use crate::common::{TestApp, routes};
use ::common::TargetKind;
use sea_orm::EntityTrait;
use serde_json::json;
use server::entity::like;

#[tokio::test]
async fn like_from_another_user_is_owned_by_liker() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let george = app
        .create_authenticated_user("george@example.com", "secret1")
        .await;
    let george_id = app.user_id(&george).await;
    let status_id = app.create_status(&fred, "Like me").await;

    let res = app
        .post_with_token(routes::LIKES, &json!({"status_id": status_id}), &george)
        .await;
    assert_eq!(res.status, 201, "Response: {}", res.text);
    assert_eq!(res.body["target_type"], "status");

    let likes = like::Entity::find().all(&app.db).await.unwrap();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].user_id, george_id);
    assert_eq!(likes[0].likeable_type, TargetKind::Status);
    assert_eq!(likes[0].likeable_id, status_id);
}

#[tokio::test]
async fn like_accepts_string_ids() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let link_id = app.create_link(&fred, "http://example.com", "Example").await;

    let res = app
        .post_with_token(
            routes::LIKES,
            &json!({"link_id": link_id.to_string()}),
            &fred,
        )
        .await;

    assert_eq!(res.status, 201, "Response: {}", res.text);
    assert_eq!(res.body["target_type"], "link");
    assert_eq!(res.body["target_id"], link_id);
}

#[tokio::test]
async fn status_id_wins_when_both_are_given() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let status_id = app.create_status(&fred, "Status").await;
    let link_id = app.create_link(&fred, "http://example.com", "Link").await;

    let res = app
        .post_with_token(
            routes::LIKES,
            &json!({"link_id": link_id, "status_id": status_id}),
            &fred,
        )
        .await;

    assert_eq!(res.status, 201, "Response: {}", res.text);
    assert_eq!(res.body["target_type"], "status");
    assert_eq!(res.body["target_id"], status_id);
}

#[tokio::test]
async fn blank_status_id_falls_back_to_link() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let link_id = app.create_link(&fred, "http://example.com", "Link").await;

    let res = app
        .post_with_token(
            routes::LIKES,
            &json!({"status_id": "", "link_id": link_id}),
            &fred,
        )
        .await;

    assert_eq!(res.status, 201, "Response: {}", res.text);
    assert_eq!(res.body["target_type"], "link");
}

#[tokio::test]
async fn like_without_target_is_rejected() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;

    let res = app.post_with_token(routes::LIKES, &json!({}), &fred).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
    assert_eq!(res.body["message"], "status_id or link_id is required");
    assert_eq!(app.count(like::Entity).await, 0);
}

#[tokio::test]
async fn like_of_missing_target_returns_not_found() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;

    let res = app
        .post_with_token(routes::LIKES, &json!({"status_id": 31337}), &fred)
        .await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");

    let res = app
        .post_with_token(routes::LIKES, &json!({"link_id": "abc"}), &fred)
        .await;
    assert_eq!(res.status, 404);

    assert_eq!(app.count(like::Entity).await, 0);
}

#[tokio::test]
async fn nested_like_routes_target_their_parent() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let status_id = app.create_status(&fred, "Status").await;
    let link_id = app.create_link(&fred, "http://example.com", "Link").await;

    let res = app
        .post_with_token(&routes::status_likes(status_id), &json!({}), &fred)
        .await;
    assert_eq!(res.status, 201, "Response: {}", res.text);
    assert_eq!(res.body["target_type"], "status");

    let res = app
        .post_with_token(&routes::link_likes(link_id), &json!({}), &fred)
        .await;
    assert_eq!(res.status, 201, "Response: {}", res.text);
    assert_eq!(res.body["target_type"], "link");
}

#[tokio::test]
async fn same_user_may_like_twice() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let status_id = app.create_status(&fred, "Status").await;

    app.create_like(&json!({"status_id": status_id}), &fred).await;
    app.create_like(&json!({"status_id": status_id}), &fred).await;

    assert_eq!(app.count(like::Entity).await, 2);
}

#[tokio::test]
async fn unauthenticated_like_is_not_persisted() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let status_id = app.create_status(&fred, "Status").await;

    let res = app
        .post_without_token(routes::LIKES, &json!({"status_id": status_id}))
        .await;

    assert_eq!(res.status, 401);
    assert_eq!(app.count(like::Entity).await, 0);
}

#[tokio::test]
async fn only_liker_can_remove_like() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let george = app
        .create_authenticated_user("george@example.com", "secret1")
        .await;
    let status_id = app.create_status(&fred, "Status").await;
    let like_id = app
        .create_like(&json!({"status_id": status_id}), &george)
        .await;

    // The status author cannot remove someone else's like.
    let res = app.delete_with_token(&routes::like(like_id), &fred).await;
    assert_eq!(res.status, 403);
    assert_eq!(res.body["code"], "PERMISSION_DENIED");
    assert_eq!(app.count(like::Entity).await, 1);

    let res = app.delete_with_token(&routes::like(like_id), &george).await;
    assert_eq!(res.status, 204);
    assert_eq!(app.count(like::Entity).await, 0);

    let res = app.delete_with_token(&routes::like(like_id), &george).await;
    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn like_of_deleted_status_returns_not_found() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let george = app
        .create_authenticated_user("george@example.com", "secret1")
        .await;
    let status_id = app.create_status(&fred, "Short-lived").await;

    let res = app.delete_with_token(&routes::status(status_id), &fred).await;
    assert_eq!(res.status, 204);

    let res = app
        .post_with_token(routes::LIKES, &json!({"status_id": status_id}), &george)
        .await;
    assert_eq!(res.status, 404);

    let res = app
        .post_with_token(&routes::status_likes(status_id), &json!({}), &george)
        .await;
    assert_eq!(res.status, 404);

    assert_eq!(app.count(like::Entity).await, 0);
}

#[tokio::test]
async fn likes_racing_a_delete_leave_no_orphans() {
    let app = TestApp::spawn().await;
    let fred = app
        .create_authenticated_user("fred@example.com", "secret1")
        .await;
    let george = app
        .create_authenticated_user("george@example.com", "secret1")
        .await;
    let status_id = app.create_status(&fred, "Contested").await;
    let body = json!({"status_id": status_id});

    let likes = async {
        let mut statuses = Vec::new();
        for _ in 0..10 {
            statuses.push(app.post_with_token(routes::LIKES, &body, &george).await.status);
        }
        statuses
    };
    let path = routes::status(status_id);
    let delete = app.delete_with_token(&path, &fred);

    let (statuses, deleted) = tokio::join!(likes, delete);

    assert_eq!(deleted.status, 204, "Response: {}", deleted.text);
    assert!(statuses.iter().all(|s| *s == 201 || *s == 404), "{statuses:?}");
    assert_eq!(app.count(like::Entity).await, 0);
}
