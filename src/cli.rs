// ============================================================================
// Image Painter CLI: startup argument validation
// ============================================================================
//
// Usage:
//   ImagePainter photo.png
//   ImagePainter shots/holiday.jpg
//
// The GUI needs exactly one image to edit, so all argument problems are
// reported before a window is created. Validation failures print a one-line
// message and the process exits with status 1.

use std::path::{Path, PathBuf};

use clap::Parser;

/// File extensions the painter can open and re-encode (lowercase).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Image Painter: paint brush strokes and flood fills onto a single image.
#[derive(Parser, Debug)]
#[command(
    name = "ImagePainter",
    about = "Paint freehand strokes and flood fills onto an image file",
    long_about = "Open a PNG or JPEG image, paint on it with a brush or flood-fill\n\
                  tool, then save in place (Ctrl+S) or as a sibling copy with an\n\
                  \"-edited\" suffix (Ctrl+Shift+S). Ctrl+Z undoes, Ctrl+Y redoes."
)]
pub struct CliArgs {
    /// Path to the image to edit (.png, .jpg or .jpeg).
    ///
    /// Optional at the clap layer so the process controls the exit status
    /// for a missing argument itself.
    #[arg(value_name = "IMAGE")]
    pub image: Option<PathBuf>,
}

/// Check whether a path carries one of the editable extensions.
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
}

/// Validate the parsed arguments down to a usable image path.
///
/// The `Err` carries the message to print before exiting with status 1.
pub fn validate(args: &CliArgs) -> Result<PathBuf, String> {
    let path = match &args.image {
        Some(p) => p.clone(),
        None => return Err("usage: ImagePainter <image-path>".to_string()),
    };

    if !path.is_file() {
        return Err(format!("File not found: {}", path.display()));
    }

    if !is_supported_extension(&path) {
        return Err("Unsupported file format. Please use .jpg or .png images.".to_string());
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_supported_extensions() {
        assert!(is_supported_extension(Path::new("a.png")));
        assert!(is_supported_extension(Path::new("a.jpg")));
        assert!(is_supported_extension(Path::new("a.jpeg")));
        assert!(is_supported_extension(Path::new("A.PNG")));
        assert!(is_supported_extension(Path::new("dir.with.dots/b.JPeG")));
    }

    #[test]
    fn rejects_unsupported_extensions() {
        assert!(!is_supported_extension(Path::new("a.gif")));
        assert!(!is_supported_extension(Path::new("a.webp")));
        assert!(!is_supported_extension(Path::new("png"))); // no extension at all
        assert!(!is_supported_extension(Path::new("archive.png.zip")));
    }

    #[test]
    fn missing_argument_is_an_error() {
        let args = CliArgs { image: None };
        let err = validate(&args).unwrap_err();
        assert!(err.starts_with("usage:"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = CliArgs {
            image: Some(PathBuf::from("/definitely/not/here.png")),
        };
        let err = validate(&args).unwrap_err();
        assert!(err.contains("File not found"));
    }
}
