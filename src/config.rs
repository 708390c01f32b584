use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
    /// None ならクライアントのデフォルトのタイムアウトに任せる
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            user_agent: format!("posts-api-tests/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }

    /// `.env` と環境変数から設定を組み立てる
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let base_url =
            std::env::var("POSTS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match std::env::var("POSTS_API_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    tracing::warn!("Ignoring POSTS_API_TIMEOUT_SECS={:?}: {}", raw, e);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            timeout,
            ..Self::new(base_url)
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn normalize_base_url(mut url: String) -> String {
    url = url.trim().to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        url = format!("https://{}", url);
    }
    while url.ends_with('/') {
        url.pop();
    }
    url
}
