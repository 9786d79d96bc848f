//! Image loading, view scaling, and saving.
//!
//! The painter edits a working buffer that is downscaled to fit the view
//! limit when the source image is larger. Both save paths restore the
//! original pixel dimensions before encoding, so the file on disk never
//! changes size because of the view scale.

use std::path::{Path, PathBuf};

use image::RgbImage;
use image::imageops::FilterType;

/// Maximum width of the editing view, in pixels.
pub const MAX_VIEW_WIDTH: u32 = 800;
/// Maximum height of the editing view, in pixels.
pub const MAX_VIEW_HEIGHT: u32 = 600;

/// An image prepared for editing: the (possibly downscaled) working buffer
/// plus everything needed to write it back at full size.
pub struct LoadedImage {
    /// The buffer the user paints on.
    pub working: RgbImage,
    /// Pixel dimensions of the file on disk.
    pub original_size: (u32, u32),
    /// Downscale applied for display; `1.0` means editing at native size.
    pub scale_ratio: f64,
}

/// Load `path`, convert to 8-bit RGB, and downscale to fit the view limit.
pub fn load_for_editing(path: &Path) -> Result<LoadedImage, String> {
    let decoded = image::open(path)
        .map_err(|e| format!("Could not open '{}': {}", path.display(), e))?
        .to_rgb8();

    let (width, height) = decoded.dimensions();
    let ratio = fit_ratio(width, height);

    let working = if ratio < 1.0 {
        let (view_w, view_h) = scaled_dims(width, height, ratio);
        image::imageops::resize(&decoded, view_w, view_h, FilterType::Lanczos3)
    } else {
        decoded
    };

    Ok(LoadedImage {
        working,
        original_size: (width, height),
        scale_ratio: ratio,
    })
}

/// Downscale ratio that fits `width × height` inside the view limit while
/// keeping the aspect ratio. Never upscales: capped at `1.0`.
pub fn fit_ratio(width: u32, height: u32) -> f64 {
    let rw = f64::from(MAX_VIEW_WIDTH) / f64::from(width.max(1));
    let rh = f64::from(MAX_VIEW_HEIGHT) / f64::from(height.max(1));
    rw.min(rh).min(1.0)
}

/// Apply `ratio` to a dimension pair, rounding to whole pixels (min 1).
pub fn scaled_dims(width: u32, height: u32, ratio: f64) -> (u32, u32) {
    let w = (f64::from(width) * ratio).round().max(1.0) as u32;
    let h = (f64::from(height) * ratio).round().max(1.0) as u32;
    (w, h)
}

/// Encode `working` to `path`, restoring `original_size` first when the
/// buffer was downscaled for display. The format follows the extension.
pub fn save_full_size(
    working: &RgbImage,
    original_size: (u32, u32),
    scale_ratio: f64,
    path: &Path,
) -> Result<(), String> {
    let result = if scale_ratio < 1.0 {
        let restored = image::imageops::resize(
            working,
            original_size.0,
            original_size.1,
            FilterType::Lanczos3,
        );
        restored.save(path)
    } else {
        working.save(path)
    };

    result.map_err(|e| format!("Could not write '{}': {}", path.display(), e))
}

/// Sibling path for the save-as-copy action: `photo.png` → `photo-edited.png`.
pub fn edited_copy_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("png");
    path.with_file_name(format!("{}-edited.{}", stem, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_are_not_scaled() {
        assert_eq!(fit_ratio(800, 600), 1.0);
        assert_eq!(fit_ratio(100, 50), 1.0);
    }

    #[test]
    fn oversized_images_fit_the_view_limit() {
        let ratio = fit_ratio(1600, 600);
        assert_eq!(ratio, 0.5);
        assert_eq!(scaled_dims(1600, 600, ratio), (800, 300));

        // The tighter axis wins
        let ratio = fit_ratio(1000, 1200);
        assert_eq!(ratio, 0.5);
        assert_eq!(scaled_dims(1000, 1200, ratio), (500, 600));
    }

    #[test]
    fn scaled_dims_round_and_stay_positive() {
        let ratio = fit_ratio(801, 601);
        let (w, h) = scaled_dims(801, 601, ratio);
        assert!(w <= MAX_VIEW_WIDTH && h <= MAX_VIEW_HEIGHT);
        assert!(w > 0 && h > 0);
        assert_eq!(scaled_dims(3, 10000, fit_ratio(3, 10000)), (1, 600));
    }

    #[test]
    fn edited_copy_keeps_directory_and_extension() {
        assert_eq!(
            edited_copy_path(Path::new("/tmp/pics/photo.png")),
            PathBuf::from("/tmp/pics/photo-edited.png")
        );
        assert_eq!(
            edited_copy_path(Path::new("shot.holiday.jpeg")),
            PathBuf::from("shot.holiday-edited.jpeg")
        );
    }
}
