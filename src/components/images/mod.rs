//! Image handling for profile and board photos
//!
//! Native file picking, downscaling and data URI encoding.

mod photo_picker;

pub use photo_picker::{pick_board_photos, pick_profile_photo};
