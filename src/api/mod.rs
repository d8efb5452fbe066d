//! HTTP API Wrappers
//!
//! Frontend bindings to the patch server, organized by domain.

mod error;
mod like;
mod patch;
mod user;

use leptos::prelude::*;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;

// Re-export all public items
pub use error::{ApiError, ApiResult};
pub use like::*;

/// Client for one patch server
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, endpoint(&self.base, path))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = send(self.request(Method::GET, path)).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_json<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> ApiResult<()> {
        send(self.request(method, path).json(body)).await?;
        Ok(())
    }

    async fn send_empty(&self, method: Method, path: &str) -> ApiResult<()> {
        send(self.request(method, path)).await?;
        Ok(())
    }
}

/// Client for the configured server
pub fn use_api() -> ApiClient {
    ApiClient::new(&expect_context::<AppConfig>().api_base)
}

/// Send and reject any non-2xx status
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response)
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_single_slash() {
        assert_eq!(endpoint("https://patches.example/", "/patches"), "https://patches.example/patches");
        assert_eq!(endpoint("https://patches.example", "likePatch"), "https://patches.example/likePatch");
    }
}
