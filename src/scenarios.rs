//! 投稿 API に対する4つのシナリオ
//!
//! どのシナリオも失敗を握りつぶさず、`ApiError` としてそのまま返す。

use crate::client::PostsClient;
use crate::error::{ApiError, ApiResult};
use models::{NewPost, Post};
use reqwest::StatusCode;
use std::fmt::Debug;

pub const SAMPLE_POST_ID: i64 = 1;

/// DELETE はサービス側の実装次第で 200 と 204 のどちらもありうる
pub const DELETE_OK_STATUSES: [StatusCode; 2] = [StatusCode::OK, StatusCode::NO_CONTENT];

pub fn sample_new_post() -> NewPost {
    NewPost::new(1, "foo", "bar")
}

pub fn sample_updated_post() -> NewPost {
    NewPost::new(1, "updated", "updated body").with_id(SAMPLE_POST_ID)
}

pub fn expect_field<T>(field: &'static str, expected: &T, actual: &T) -> ApiResult<()>
where
    T: PartialEq + Debug + ?Sized,
{
    if expected == actual {
        return Ok(());
    }
    Err(ApiError::FieldMismatch {
        field,
        expected: format!("{:?}", expected),
        actual: format!("{:?}", actual),
    })
}

/// GET /posts/{id}
pub async fn retrieve_post(client: &PostsClient, id: i64) -> ApiResult<Post> {
    let res = client.get_post(id).await?;
    res.expect_status(StatusCode::OK)?;

    // user_id / title / body は必須フィールドなのでデシリアライズできた時点で存在が保証される
    let post: Post = res.json()?;
    expect_field("id", &id, &post.id)?;
    Ok(post)
}

/// POST /posts
///
/// サーバー採番の id は検証しない。
pub async fn create_post(client: &PostsClient, payload: &NewPost) -> ApiResult<Post> {
    let res = client.create_post(payload).await?;
    res.expect_status(StatusCode::CREATED)?;

    let post: Post = res.json()?;
    expect_echoed_fields(payload, &post)?;
    Ok(post)
}

/// PUT /posts/{id}
pub async fn update_post(client: &PostsClient, id: i64, payload: &NewPost) -> ApiResult<Post> {
    let res = client.update_post(id, payload).await?;
    res.expect_status(StatusCode::OK)?;

    let post: Post = res.json()?;
    expect_echoed_fields(payload, &post)?;
    Ok(post)
}

/// DELETE /posts/{id}
pub async fn delete_post(client: &PostsClient, id: i64) -> ApiResult<StatusCode> {
    let res = client.delete_post(id).await?;
    res.expect_status_in(&DELETE_OK_STATUSES)?;
    Ok(res.status)
}

fn expect_echoed_fields(payload: &NewPost, post: &Post) -> ApiResult<()> {
    expect_field("user_id", &payload.user_id, &post.user_id)?;
    if let Some(id) = payload.id {
        expect_field("id", &id, &post.id)?;
    }
    expect_field("title", payload.title.as_str(), post.title.as_str())?;
    expect_field("body", payload.body.as_str(), post.body.as_str())?;
    Ok(())
}
