pub mod client;
pub mod config;
pub mod error;
pub mod fixture;
pub mod scenarios;

pub use client::{ApiResponse, PostsClient};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use fixture::{init_tracing, ApiFixture};
pub use models::{NewPost, Post};
