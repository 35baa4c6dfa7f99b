//! UI Components for F-list.

mod add_item_modal;
mod header;
pub mod images;
mod item_card;
mod loading;
mod login_modal;
mod notice_modal;
mod profile_editor;
mod tabs;

pub use add_item_modal::AddItemModal;
pub use header::{Header, HeaderLocation};
pub use item_card::ItemGrid;
pub use loading::LoadingScreen;
pub use login_modal::LoginModal;
pub use notice_modal::NoticeModal;
pub use profile_editor::{apply_profile_commits, ProfileEditor};
pub use tabs::CollectionTabs;
