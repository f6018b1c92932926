use std::collections::BTreeSet;
use std::io::Cursor;

use bytes::Bytes;
use image::{DynamicImage, ImageFormat, ImageReader};

use crate::providers::{IngredientDetector, ProviderError};

/// Decode an uploaded image (format sniffed from magic bytes), force RGB, and
/// re-encode as JPEG, the only format the inference endpoint accepts.
pub fn normalize_to_jpeg(data: &[u8]) -> Result<Vec<u8>, ProviderError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ProviderError::Image(format!("failed to read image: {e}")))?;

    let img = reader
        .decode()
        .map_err(|e| ProviderError::Image(format!("failed to decode image: {e}")))?;

    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buf = Cursor::new(Vec::new());
    rgb.write_to(&mut buf, ImageFormat::Jpeg)
        .map_err(|e| ProviderError::Image(format!("failed to encode jpeg: {e}")))?;

    Ok(buf.into_inner())
}

/// Normalize, submit, and collapse the predicted classes into a sorted unique
/// set. Confidence scores and bounding boxes are discarded.
pub async fn detect_ingredients(
    detector: &dyn IngredientDetector,
    data: &[u8],
) -> Result<Vec<String>, ProviderError> {
    let jpeg = normalize_to_jpeg(data)?;
    let classes = detector.detect(Bytes::from(jpeg)).await?;
    let unique: BTreeSet<String> = classes.into_iter().collect();
    Ok(unique.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    fn png_fixture() -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            4,
            4,
            image::Rgba([200, 50, 50, 255]),
        ));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    struct StaticDetector {
        classes: Vec<&'static str>,
    }

    #[async_trait]
    impl IngredientDetector for StaticDetector {
        async fn detect(&self, jpeg: Bytes) -> Result<Vec<String>, ProviderError> {
            // The service must hand us a decodable JPEG.
            let format = image::guess_format(&jpeg)
                .map_err(|e| ProviderError::Image(e.to_string()))?;
            assert_eq!(format, ImageFormat::Jpeg);
            Ok(self.classes.iter().map(|c| c.to_string()).collect())
        }
    }

    #[test]
    fn normalize_produces_rgb_jpeg() {
        let jpeg = normalize_to_jpeg(&png_fixture()).unwrap();
        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);

        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn normalize_rejects_garbage() {
        let err = normalize_to_jpeg(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ProviderError::Image(_)));
    }

    #[tokio::test]
    async fn duplicate_classes_collapse_into_a_set() {
        let detector = StaticDetector {
            classes: vec!["egg", "egg", "tomato"],
        };
        let ingredients = detect_ingredients(&detector, &png_fixture()).await.unwrap();
        assert_eq!(ingredients, vec!["egg".to_string(), "tomato".to_string()]);
    }
}
