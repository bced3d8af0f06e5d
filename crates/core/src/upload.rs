//! Upload acceptance rules for product images.
//!
//! A file is accepted only when its extension AND its sniffed content both
//! fall inside the image allow-list, and it stays under the size ceiling.
//! Content sniffing uses the magic bytes via [`image::guess_format`], so a
//! renamed non-image file is rejected even with an allowed extension.

use image::ImageFormat;

/// Maximum accepted upload size (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// File extensions accepted for upload, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];

/// Why an upload was refused. Both variants map to HTTP 400.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Only image files are allowed")]
    UnsupportedMediaType,

    #[error("File size too large")]
    PayloadTooLarge,
}

/// Lowercased extension of `filename`, if it has one.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Validate an upload, returning the lowercased extension to store under.
///
/// Checks, in order: size ceiling, extension allow-list, sniffed content
/// format allow-list.
pub fn validate_image(filename: &str, bytes: &[u8]) -> Result<String, UploadError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::PayloadTooLarge);
    }

    let extension = file_extension(filename).ok_or(UploadError::UnsupportedMediaType)?;
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadError::UnsupportedMediaType);
    }

    let format = image::guess_format(bytes).map_err(|_| UploadError::UnsupportedMediaType)?;
    if !matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Gif | ImageFormat::WebP
    ) {
        return Err(UploadError::UnsupportedMediaType);
    }

    Ok(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal PNG signature (magic bytes only; no valid image data needed
    /// for format sniffing).
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
    const GIF_MAGIC: &[u8] = b"GIF89a\x00\x00";

    #[test]
    fn test_accepts_png_with_png_extension() {
        let ext = validate_image("watch.png", PNG_MAGIC).expect("valid png should pass");
        assert_eq!(ext, "png");
    }

    #[test]
    fn test_normalizes_extension_case() {
        let ext = validate_image("WATCH.JPG", JPEG_MAGIC).expect("uppercase jpg should pass");
        assert_eq!(ext, "jpg");
    }

    #[test]
    fn test_rejects_disallowed_extension() {
        // Content is a real PNG but the extension is not in the allow-list.
        let result = validate_image("watch.bmp", PNG_MAGIC);
        assert_eq!(result, Err(UploadError::UnsupportedMediaType));
    }

    #[test]
    fn test_rejects_renamed_non_image() {
        // Allowed extension, but the bytes are plain text.
        let result = validate_image("watch.jpg", b"definitely not an image");
        assert_eq!(result, Err(UploadError::UnsupportedMediaType));
    }

    #[test]
    fn test_rejects_missing_extension() {
        assert_eq!(
            validate_image("watch", PNG_MAGIC),
            Err(UploadError::UnsupportedMediaType)
        );
        assert_eq!(
            validate_image(".png", PNG_MAGIC),
            Err(UploadError::UnsupportedMediaType)
        );
    }

    #[test]
    fn test_rejects_oversized_payload() {
        let mut bytes = Vec::with_capacity(MAX_UPLOAD_BYTES + 1);
        bytes.extend_from_slice(GIF_MAGIC);
        bytes.resize(MAX_UPLOAD_BYTES + 1, 0);

        let result = validate_image("watch.gif", &bytes);
        assert_eq!(result, Err(UploadError::PayloadTooLarge));
    }

    #[test]
    fn test_accepts_exactly_at_size_limit() {
        let mut bytes = Vec::with_capacity(MAX_UPLOAD_BYTES);
        bytes.extend_from_slice(GIF_MAGIC);
        bytes.resize(MAX_UPLOAD_BYTES, 0);

        assert!(validate_image("watch.gif", &bytes).is_ok());
    }

    #[test]
    fn test_file_extension_parsing() {
        assert_eq!(file_extension("a.jpg"), Some("jpg".to_string()));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), None);
    }
}
