//! 本物の JSONPlaceholder に対して4つのシナリオを流す。
//! ネットワークが必要なので `cargo test -- --ignored` で明示的に実行する。
//! 向き先は POSTS_API_BASE_URL で上書きできる。

use anyhow::Context;
use posts_api_tests::scenarios::{
    self, sample_new_post, sample_updated_post, DELETE_OK_STATUSES, SAMPLE_POST_ID,
};
use posts_api_tests::ApiFixture;

#[tokio::test]
#[ignore = "requires network access to jsonplaceholder.typicode.com"]
async fn live_get_post_by_id_should_return_post() -> anyhow::Result<()> {
    let fixture = ApiFixture::from_env()?;

    let post = scenarios::retrieve_post(fixture.client(), SAMPLE_POST_ID)
        .await
        .context("GET /posts/1")?;

    assert_eq!(post.id, 1);
    assert!(!post.title.is_empty());
    assert!(!post.body.is_empty());
    Ok(())
}

#[tokio::test]
#[ignore = "requires network access to jsonplaceholder.typicode.com"]
async fn live_create_post_should_return_created_post() -> anyhow::Result<()> {
    let fixture = ApiFixture::from_env()?;

    let post = scenarios::create_post(fixture.client(), &sample_new_post())
        .await
        .context("POST /posts")?;

    assert_eq!(post.user_id, 1);
    assert_eq!(post.title, "foo");
    assert_eq!(post.body, "bar");
    Ok(())
}

#[tokio::test]
#[ignore = "requires network access to jsonplaceholder.typicode.com"]
async fn live_update_post_should_return_updated_post() -> anyhow::Result<()> {
    let fixture = ApiFixture::from_env()?;

    let post = scenarios::update_post(fixture.client(), SAMPLE_POST_ID, &sample_updated_post())
        .await
        .context("PUT /posts/1")?;

    assert_eq!(post.user_id, 1);
    assert_eq!(post.id, 1);
    assert_eq!(post.title, "updated");
    assert_eq!(post.body, "updated body");
    Ok(())
}

#[tokio::test]
#[ignore = "requires network access to jsonplaceholder.typicode.com"]
async fn live_delete_post_should_return_success() -> anyhow::Result<()> {
    let fixture = ApiFixture::from_env()?;

    let status = scenarios::delete_post(fixture.client(), SAMPLE_POST_ID)
        .await
        .context("DELETE /posts/1")?;

    assert!(DELETE_OK_STATUSES.contains(&status));
    Ok(())
}
