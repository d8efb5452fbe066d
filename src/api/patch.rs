//! Patch Requests
//!
//! Listing, reading, editing and deleting patches.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use super::{send, ApiClient, ApiResult};
use crate::format::path_segment;
use crate::metadata::{ImageUpload, PatchUpdate, IMAGE_MIME};
use crate::models::{PatchDetail, PatchMetadata, PatchSummary};

impl ApiClient {
    /// All patches, newest first as ordered by the server
    pub async fn list_patches(&self) -> ApiResult<Vec<PatchSummary>> {
        self.get_json("/patches").await
    }

    /// Patches uploaded by `user_id`
    pub async fn list_user_patches(&self, user_id: &str) -> ApiResult<Vec<PatchSummary>> {
        self.get_json(&format!("/getUserPatchInfo/{}", path_segment(user_id))).await
    }

    /// Editable metadata for the edit modal
    pub async fn get_full_patch_info(&self, patch_id: &str) -> ApiResult<PatchMetadata> {
        self.get_json(&format!("/getFullPatchInfo/{}", path_segment(patch_id))).await
    }

    pub async fn get_patch_by_artist(&self, username: &str, patchname: &str) -> ApiResult<PatchDetail> {
        self.get_json(&format!("/artist/{}/{}", path_segment(username), path_segment(patchname)))
            .await
    }

    /// Replace name, tags and description; the image is only sent when a new
    /// one was picked
    pub async fn update_patch(&self, patch_id: &str, update: &PatchUpdate, image: Option<ImageUpload>) -> ApiResult<()> {
        let mut form = Form::new()
            .text("name", update.name.clone())
            .text("tags", update.tags.clone())
            .text("description", update.description.clone());

        if let Some(image) = image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(IMAGE_MIME)?;
            form = form.part("imageFile", part);
        }

        let path = format!("/updatePatch/{}", path_segment(patch_id));
        send(self.request(Method::PUT, &path).multipart(form)).await?;
        Ok(())
    }

    pub async fn delete_patch(&self, patch_id: &str) -> ApiResult<()> {
        self.send_empty(Method::DELETE, &format!("/deletePatch/{}", path_segment(patch_id)))
            .await
    }
}
