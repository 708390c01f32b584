use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use models::NewPost;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

/// 1テストにつき1つ作る HTTP クライアント
#[derive(Clone, Debug)]
pub struct PostsClient {
    client: Client,
    base_url: String,
}

/// ステータスと生のボディをそのまま保持したレスポンス
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub body: String,
}

impl PostsClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("{}: {}", config.base_url, e)))?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_posts(&self) -> ApiResult<ApiResponse> {
        self.send(Method::GET, "/posts".to_string(), None).await
    }

    pub async fn get_post(&self, id: i64) -> ApiResult<ApiResponse> {
        self.send(Method::GET, format!("/posts/{}", id), None).await
    }

    pub async fn create_post(&self, post: &NewPost) -> ApiResult<ApiResponse> {
        self.send(Method::POST, "/posts".to_string(), Some(post))
            .await
    }

    pub async fn update_post(&self, id: i64, post: &NewPost) -> ApiResult<ApiResponse> {
        self.send(Method::PUT, format!("/posts/{}", id), Some(post))
            .await
    }

    pub async fn delete_post(&self, id: i64) -> ApiResult<ApiResponse> {
        self.send(Method::DELETE, format!("/posts/{}", id), None)
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: String,
        payload: Option<&NewPost>,
    ) -> ApiResult<ApiResponse> {
        tracing::info!("{} Request: {}", method, path);

        let mut request = self.client.request(method.clone(), self.url(&path));
        if let Some(payload) = payload {
            // ログ用。送信は reqwest の json() に任せる
            let rendered = serde_json::to_string(payload).unwrap_or_default();
            tracing::info!("Request Body: {}", rendered);
            request = request.json(payload);
        }

        let res = request.send().await.map_err(|source| ApiError::Transport {
            method: method.clone(),
            path: path.clone(),
            source,
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| ApiError::Transport {
            method: method.clone(),
            path: path.clone(),
            source,
        })?;

        tracing::info!("Response Status: {}", status);
        tracing::info!("Response Content: {}", body);

        Ok(ApiResponse {
            method,
            path,
            status,
            body,
        })
    }
}

impl ApiResponse {
    pub fn expect_status(&self, expected: StatusCode) -> ApiResult<&Self> {
        self.expect_status_in(&[expected])
    }

    pub fn expect_status_in(&self, accepted: &[StatusCode]) -> ApiResult<&Self> {
        if accepted.contains(&self.status) {
            return Ok(self);
        }

        tracing::warn!(
            "{} {} returned unexpected status: status={}, body={}",
            self.method,
            self.path,
            self.status,
            self.body
        );
        Err(ApiError::UnexpectedStatus {
            method: self.method.clone(),
            path: self.path.clone(),
            expected: accepted.to_vec(),
            actual: self.status,
            body: self.body.clone(),
        })
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|source| ApiError::Decode {
            method: self.method.clone(),
            path: self.path.clone(),
            body: self.body.clone(),
            source,
        })
    }
}
