//! Like Requests
//!
//! Like/unlike endpoints and their `LikeApi` binding for the toggle
//! controller.

use async_trait::async_trait;
use optimistic_toggle::{LikeApi, RemoteError};
use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::format::path_segment;

#[derive(Serialize)]
struct LikeArgs<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
    #[serde(rename = "patchId")]
    patch_id: &'a str,
}

impl ApiClient {
    pub async fn like_patch(&self, user_id: &str, patch_id: &str) -> ApiResult<()> {
        self.send_json(Method::POST, "/likePatch", &LikeArgs { user_id, patch_id }).await
    }

    pub async fn unlike_patch(&self, user_id: &str, patch_id: &str) -> ApiResult<()> {
        self.send_json(Method::POST, "/unlikePatch", &LikeArgs { user_id, patch_id }).await
    }

    /// Ids of every patch `user_id` likes
    pub async fn list_liked_patches(&self, user_id: &str) -> ApiResult<Vec<String>> {
        self.get_json(&format!("/likedPatches/{}", path_segment(user_id))).await
    }
}

/// `LikeApi` backed by the patch server
pub struct HttpLikeApi {
    client: ApiClient,
}

impl HttpLikeApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl LikeApi for HttpLikeApi {
    async fn like(&self, user_id: &str, patch_id: &str) -> Result<(), RemoteError> {
        self.client.like_patch(user_id, patch_id).await.map_err(RemoteError::from)
    }

    async fn unlike(&self, user_id: &str, patch_id: &str) -> Result<(), RemoteError> {
        self.client.unlike_patch(user_id, patch_id).await.map_err(RemoteError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_args_use_camel_case() {
        let json = serde_json::to_string(&LikeArgs { user_id: "u1", patch_id: "p1" }).unwrap();
        assert_eq!(json, r#"{"userId":"u1","patchId":"p1"}"#);
    }
}
