//! Session Requests

use reqwest::Method;

use super::{ApiClient, ApiResult};
use crate::models::User;

impl ApiClient {
    /// Signed-in user, or `None` for anonymous visitors
    pub async fn current_user(&self) -> ApiResult<Option<User>> {
        self.get_json("/currentUser").await
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.send_empty(Method::POST, "/logout").await
    }
}
