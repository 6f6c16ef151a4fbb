//! Image payload preparation.
//!
//! Photos are always uploaded as JPEG. Anything the `image` crate can decode
//! is re-encoded at the configured quality before upload.

use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Form field carrying the photo.
pub const IMAGE_FIELD: &str = "image";
/// File name announced for the photo.
pub const IMAGE_FILENAME: &str = "image.jpg";
/// Content type of the photo part.
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// Encoded photo bytes ready for upload. Lives for one request.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    bytes: Vec<u8>,
    content_type: &'static str,
}

impl ImagePayload {
    /// Wrap bytes that are already JPEG-encoded.
    pub fn jpeg(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: JPEG_CONTENT_TYPE,
        }
    }

    /// Decode an image in any supported format and re-encode it as JPEG.
    pub fn from_image_bytes(data: &[u8], quality: u8) -> ClientResult<Self> {
        let image = image::load_from_memory(data)?;
        Self::from_image(&image, quality)
    }

    /// Encode a decoded image as JPEG.
    pub fn from_image(image: &DynamicImage, quality: u8) -> ClientResult<Self> {
        // JPEG has no alpha channel
        let rgb = image.to_rgb8();
        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).encode_image(&rgb)?;

        debug!(
            width = rgb.width(),
            height = rgb.height(),
            quality,
            size = bytes.len(),
            "Encoded photo as JPEG"
        );

        Ok(Self::jpeg(bytes))
    }

    /// Read an image file and re-encode it as JPEG.
    ///
    /// Decoding and encoding run on the blocking pool.
    pub async fn from_path(path: impl AsRef<Path>, quality: u8) -> ClientResult<Self> {
        let data = tokio::fs::read(path.as_ref()).await?;
        tokio::task::spawn_blocking(move || Self::from_image_bytes(&data, quality))
            .await
            .map_err(ClientError::task)?
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &str {
        self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Build the single-part multipart form.
    ///
    /// Each form gets its own random boundary, which reqwest also writes into
    /// the request's `Content-Type` header.
    pub fn into_form(self) -> ClientResult<Form> {
        let part = Part::bytes(self.bytes)
            .file_name(IMAGE_FILENAME)
            .mime_str(self.content_type)?;
        Ok(Form::new().part(IMAGE_FIELD, part))
    }
}

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;

    fn png_bytes() -> Vec<u8> {
        let image = RgbaImage::from_pixel(8, 6, Rgba([200, 120, 90, 128]));
        let mut out = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(image)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_jpeg_passthrough() {
        let payload = ImagePayload::jpeg(vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(payload.bytes(), &[0xFF, 0xD8, 0xFF]);
        assert_eq!(payload.content_type(), "image/jpeg");
        assert_eq!(payload.len(), 3);
    }

    #[test]
    fn test_png_is_reencoded_as_jpeg() {
        let payload = ImagePayload::from_image_bytes(&png_bytes(), 80).unwrap();
        assert_eq!(payload.content_type(), JPEG_CONTENT_TYPE);
        assert!(payload.bytes().starts_with(&[0xFF, 0xD8]));

        let decoded = image::load_from_memory(payload.bytes()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result = ImagePayload::from_image_bytes(b"definitely not an image", 80);
        assert!(matches!(result, Err(ClientError::Payload(_))));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lesion.png");
        std::fs::write(&path, png_bytes()).unwrap();

        let payload = tokio_test::block_on(ImagePayload::from_path(&path, 90)).unwrap();
        assert!(!payload.is_empty());

        let missing = tokio_test::block_on(ImagePayload::from_path(dir.path().join("nope.jpg"), 90));
        assert!(matches!(missing, Err(ClientError::Io(_))));
    }

    #[test]
    fn test_from_path_rejects_non_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.jpg");
        std::fs::write(&path, b"not really a photo").unwrap();

        let result = tokio_test::block_on(ImagePayload::from_path(&path, 80));
        assert!(matches!(result, Err(ClientError::Payload(_))));
    }
}
