/// Integration tests for the blog
///
/// These drive the full router over an in-memory database:
/// - creation stamps the server time, never caller input
/// - editing preserves the post's id
/// - deletion of a missing id is a harmless no-op
/// - a missing post renders the 404 page
/// - Markdown renders in the detail view

mod common;

use axum::http::{header, StatusCode};
use bureau_blog::models::post::Post;
use chrono::{Duration, Utc};
use common::TestContext;

#[tokio::test]
async fn test_empty_list() {
    let ctx = TestContext::new().await.unwrap();

    let response = common::get(&ctx, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Nothing here yet!"));
}

#[tokio::test]
async fn test_create_post_stamps_server_time() {
    let ctx = TestContext::new().await.unwrap();

    let before = Utc::now();
    let response = common::post_form(&ctx, "/add", "title=Hello+world&text=First+post").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    let after = Utc::now();

    let posts = Post::all_newest_first(&ctx.db).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Hello world");
    assert!(posts[0].date >= before && posts[0].date <= after);
}

#[tokio::test]
async fn test_short_title_redisplays_form() {
    let ctx = TestContext::new().await.unwrap();

    let response = common::post_form(&ctx, "/add", "title=abc&text=whatever").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("title must be 4-25 characters"));
    // The submitted values are redisplayed
    assert!(body.contains("whatever"));

    let posts = Post::all_newest_first(&ctx.db).await.unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_edit_preserves_id_and_overwrites_fields() {
    let ctx = TestContext::new().await.unwrap();

    common::post_form(&ctx, "/add", "title=Original&text=Old+text").await;
    let original = Post::all_newest_first(&ctx.db).await.unwrap().remove(0);

    let response = common::post_form(
        &ctx,
        &format!("/edit/{}", original.id),
        "title=Changed+title&text=New+text",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let posts = Post::all_newest_first(&ctx.db).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, original.id);
    assert_eq!(posts[0].title, "Changed title");
    assert_eq!(posts[0].text, "New text");
    assert!(posts[0].date >= original.date);
}

#[tokio::test]
async fn test_edit_page_prefills_stored_values() {
    let ctx = TestContext::new().await.unwrap();

    common::post_form(&ctx, "/add", "title=Original&text=Some+text").await;
    let post = Post::all_newest_first(&ctx.db).await.unwrap().remove(0);

    let response = common::get(&ctx, &format!("/edit/{}", post.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Original"));
    assert!(body.contains("Some text"));
}

#[tokio::test]
async fn test_delete_missing_id_is_noop() {
    let ctx = TestContext::new().await.unwrap();

    common::post_form(&ctx, "/add", "title=Survivor&text=Still+here").await;

    let response = common::get(&ctx, "/delete/no-such-id").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // Other posts are untouched
    let posts = Post::all_newest_first(&ctx.db).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Survivor");
}

#[tokio::test]
async fn test_delete_removes_post() {
    let ctx = TestContext::new().await.unwrap();

    common::post_form(&ctx, "/add", "title=Doomed+post&text=Bye").await;
    let post = Post::all_newest_first(&ctx.db).await.unwrap().remove(0);

    let response = common::get(&ctx, &format!("/delete/{}", post.id)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    assert!(Post::all_newest_first(&ctx.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_view_missing_post_renders_not_found() {
    let ctx = TestContext::new().await.unwrap();

    let response = common::get(&ctx, "/view/no-such-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = common::body_string(response).await;
    assert!(body.contains("No such post"));
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let ctx = TestContext::new().await.unwrap();

    // Save directly so the dates are unambiguous
    let mut older = Post::new("Older post".to_string(), String::new());
    older.date = Utc::now() - Duration::days(1);
    older.save(&ctx.db).await.unwrap();

    let newer = Post::new("Newer post".to_string(), String::new());
    newer.save(&ctx.db).await.unwrap();

    let body = common::body_string(common::get(&ctx, "/").await).await;
    let newer_at = body.find("Newer post").unwrap();
    let older_at = body.find("Older post").unwrap();
    assert!(newer_at < older_at);
}

#[tokio::test]
async fn test_view_renders_markdown() {
    let ctx = TestContext::new().await.unwrap();

    common::post_form(&ctx, "/add", "title=Formatted&text=**bold**+words").await;
    let post = Post::all_newest_first(&ctx.db).await.unwrap().remove(0);

    let body = common::body_string(common::get(&ctx, &format!("/view/{}", post.id)).await).await;
    assert!(body.contains("<strong>bold</strong>"));
}
