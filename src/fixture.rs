use crate::client::PostsClient;
use crate::config::ApiConfig;
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// テストごとのログ出力を初期化する。何度呼んでもよい
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// 1テスト分のクライアントを持つ。Drop で必ず解放される
pub struct ApiFixture {
    client: PostsClient,
}

impl ApiFixture {
    pub fn setup(config: &ApiConfig) -> anyhow::Result<Self> {
        init_tracing();

        let client = PostsClient::new(config)
            .with_context(|| format!("Failed to build client for {}", config.base_url))?;
        tracing::debug!("setup: client bound to {}", client.base_url());

        Ok(Self { client })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::setup(&ApiConfig::from_env())
    }

    pub fn client(&self) -> &PostsClient {
        &self.client
    }
}

impl Drop for ApiFixture {
    // client フィールドはこの後に drop され、コネクションプールも閉じられる
    fn drop(&mut self) {
        tracing::debug!("teardown: releasing client for {}", self.client.base_url());
    }
}
