//! Photo Picker
//!
//! Opens the native file dialog off the UI thread, then turns each chosen
//! file into an embeddable PNG data URI no larger than 512 px on a side.

use std::path::{Path, PathBuf};

use flist_core::ImageRef;
use image::{DynamicImage, GenericImageView, ImageFormat};
use rfd::FileDialog;

/// Longest side of a stored photo, in pixels
const MAX_DIMENSION: u32 = 512;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Let the user choose a profile photo.
///
/// `Ok(None)` when the dialog was cancelled.
pub async fn pick_profile_photo() -> Result<Option<ImageRef>, String> {
    let file_path = tokio::task::spawn_blocking(move || {
        FileDialog::new()
            .add_filter("images", IMAGE_EXTENSIONS)
            .set_title("Choose Photo")
            .pick_file()
    })
    .await
    .map_err(|e| format!("File picker error: {:?}", e))?;

    match file_path {
        Some(path) => load_as_data_uri(&path).map(Some),
        None => Ok(None),
    }
}

/// Let the user choose several board photos.
///
/// Files that fail to load are skipped and logged.
pub async fn pick_board_photos() -> Result<Vec<ImageRef>, String> {
    let file_paths: Vec<PathBuf> = tokio::task::spawn_blocking(move || {
        FileDialog::new()
            .add_filter("images", IMAGE_EXTENSIONS)
            .set_title("Add to Style Board")
            .pick_files()
            .unwrap_or_default()
    })
    .await
    .map_err(|e| format!("File picker error: {:?}", e))?;

    let images = tokio::task::spawn_blocking(move || {
        file_paths
            .iter()
            .filter_map(|path| match load_as_data_uri(path) {
                Ok(image) => Some(image),
                Err(e) => {
                    tracing::warn!(?path, "{}", e);
                    None
                }
            })
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| format!("Failed to load photos: {:?}", e))?;

    Ok(images)
}

fn load_as_data_uri(path: &Path) -> Result<ImageRef, String> {
    let img = image::open(path).map_err(|e| format!("Failed to load image: {:?}", e))?;
    encode_png(downscale(img))
}

/// Shrink so neither side exceeds [`MAX_DIMENSION`]; smaller images are kept as is.
fn downscale(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
        return img;
    }
    img.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
}

fn encode_png(img: DynamicImage) -> Result<ImageRef, String> {
    let mut buffer = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| format!("Failed to encode: {:?}", e))?;
    Ok(ImageRef::from_png_bytes(&buffer))
}
