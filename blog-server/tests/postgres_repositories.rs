//! Repository tests against PostgreSQL.
//!
//! Each test gets a fresh database with `migrations/` applied; `DATABASE_URL`
//! must point at a server the test user can create databases on.

use blog_server::data::category_repository::{CategoryRepository, PostgresCategoryRepository};
use blog_server::data::comment_repository::{CommentRepository, PostgresCommentRepository};
use blog_server::data::post_repository::{PostRepository, PostgresPostRepository};
use blog_server::domain::category::Category;
use blog_server::domain::comment::Comment;
use blog_server::domain::document::Document;
use blog_server::domain::post::{NewPost, Post, PostChanges};
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

async fn stored_post(repo: &PostgresPostRepository, fields: Value) -> Post {
    let post = repo
        .create(Post::new(NewPost {
            category: Uuid::new_v4(),
            comments: vec![],
            fields: doc(fields),
        }))
        .await
        .unwrap();
    // Read back so timestamps carry the database's precision.
    repo.find_by_id(post.id).await.unwrap().unwrap()
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_merges_body_and_keeps_created_at(pool: PgPool) {
    let repo = PostgresPostRepository::new(pool);
    let post = stored_post(&repo, json!({ "title": "Hi", "content": "draft" })).await;

    let updated = repo
        .update(
            post.id,
            PostChanges {
                fields: doc(json!({ "content": "final", "createdAt": "1970-01-01T00:00:00Z" })),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.fields["title"], "Hi");
    assert_eq!(updated.fields["content"], "final");
    assert!(!updated.fields.contains_key("createdAt"));
    assert_eq!(updated.category, post.category);
    assert_eq!(updated.created_at, post.created_at);
    assert!(updated.updated_at >= post.updated_at);
}

#[sqlx::test]
async fn update_replaces_category_only_when_given(pool: PgPool) {
    let repo = PostgresPostRepository::new(pool);
    let post = stored_post(&repo, json!({ "title": "Hi" })).await;
    let other = Uuid::new_v4();

    let moved = repo
        .update(
            post.id,
            PostChanges {
                category: Some(other),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.category, other);

    assert_eq!(repo.list_by_category(other).await.unwrap().len(), 1);
    assert!(repo.list_by_category(post.category).await.unwrap().is_empty());
}

#[sqlx::test]
async fn update_of_unknown_post_is_none(pool: PgPool) {
    let repo = PostgresPostRepository::new(pool);

    let result = repo
        .update(Uuid::new_v4(), PostChanges::default())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn push_comment_appends_in_order(pool: PgPool) {
    let repo = PostgresPostRepository::new(pool);
    let post = stored_post(&repo, json!({})).await;
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    repo.push_comment(post.id, first).await.unwrap().unwrap();
    let after = repo.push_comment(post.id, second).await.unwrap().unwrap();

    assert_eq!(after.comments, vec![first, second]);
    assert!(repo.push_comment(Uuid::new_v4(), first).await.unwrap().is_none());
}

#[sqlx::test]
async fn delete_returns_removed_post_with_comment_ids(pool: PgPool) {
    let repo = PostgresPostRepository::new(pool);
    let post = stored_post(&repo, json!({ "title": "bye" })).await;
    let comment = Uuid::new_v4();
    repo.push_comment(post.id, comment).await.unwrap();

    let deleted = repo.delete(post.id).await.unwrap().unwrap();

    assert_eq!(deleted.id, post.id);
    assert_eq!(deleted.comments, vec![comment]);
    assert_eq!(deleted.fields["title"], "bye");
    assert!(repo.find_by_id(post.id).await.unwrap().is_none());
    assert!(repo.delete(post.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn list_returns_posts_in_creation_order(pool: PgPool) {
    let repo = PostgresPostRepository::new(pool);
    let first = stored_post(&repo, json!({ "title": "one" })).await;
    let second = stored_post(&repo, json!({ "title": "two" })).await;

    let ids: Vec<Uuid> = repo.list().await.unwrap().iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn delete_many_ignores_unknown_ids(pool: PgPool) {
    let repo = PostgresCommentRepository::new(pool);
    let kept = repo
        .create(Comment::new(doc(json!({ "text": "stays" }))))
        .await
        .unwrap();
    let dropped = repo
        .create(Comment::new(doc(json!({ "text": "goes" }))))
        .await
        .unwrap();

    let removed = repo
        .delete_many(&[dropped.id, Uuid::new_v4()])
        .await
        .unwrap();

    assert_eq!(removed, 1);
    assert!(repo.find_by_id(dropped.id).await.unwrap().is_none());
    let kept = repo.find_by_id(kept.id).await.unwrap().unwrap();
    assert_eq!(kept.body["text"], "stays");
}

#[sqlx::test]
async fn find_by_ids_resolves_known_comments(pool: PgPool) {
    let repo = PostgresCommentRepository::new(pool);
    let comment = repo
        .create(Comment::new(doc(json!({ "text": "hello" }))))
        .await
        .unwrap();

    let found = repo
        .find_by_ids(&[comment.id, Uuid::new_v4()])
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, comment.id);
    assert!(repo.find_by_ids(&[]).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn categories_round_trip_and_resolve_by_ids(pool: PgPool) {
    let repo = PostgresCategoryRepository::new(pool);
    let tech = repo
        .create(Category::new("Tech".into()).unwrap())
        .await
        .unwrap();
    let life = repo
        .create(Category::new("Life".into()).unwrap())
        .await
        .unwrap();

    let fetched = repo.find_by_id(tech.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Tech");

    let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Tech", "Life"]);

    let resolved = repo.find_by_ids(&[life.id]).await.unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].name, "Life");
}
