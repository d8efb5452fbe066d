//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod edit_list_entry;
mod edit_metadata_modal;
mod like_button;
mod list_entry;
mod manage_uploads;
mod notification;
mod patch_list;
mod patch_page;
mod tag_select;
mod tooltip;
mod user_dropdown;

pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_list_entry::EditListEntry;
pub use edit_metadata_modal::EditMetadataModal;
pub use like_button::{LikeButton, LikeSeed};
pub use list_entry::ListEntry;
pub use manage_uploads::ManageUploads;
pub use notification::Notification;
pub use patch_list::PatchList;
pub use patch_page::PatchPage;
pub use tag_select::TagSelect;
pub use tooltip::Tooltip;
pub use user_dropdown::UserDropdown;
