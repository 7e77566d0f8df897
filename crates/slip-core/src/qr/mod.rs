//! PromptPay QR payload decoding and QR scanning.

pub mod promptpay;
pub mod tlv;

pub use promptpay::{decode_promptpay, format_identifier, try_decode_promptpay};
pub use tlv::{parse_records, TlvReader, TlvRecord};

use image::DynamicImage;

use crate::error::QrError;

/// Locates a QR code in an image and returns its raw payload.
pub trait QrScanner: Send + Sync {
    /// Scan the image; `Ok(None)` when no QR code is present.
    fn scan(&self, image: &DynamicImage) -> Result<Option<String>, QrError>;
}

/// Scanner that returns a payload decoded elsewhere.
#[derive(Debug, Clone, Default)]
pub struct StaticPayload(Option<String>);

impl StaticPayload {
    pub fn new(payload: impl Into<String>) -> Self {
        Self(Some(payload.into()))
    }

    /// A scanner that never finds a QR code.
    pub fn none() -> Self {
        Self(None)
    }
}

impl QrScanner for StaticPayload {
    fn scan(&self, _image: &DynamicImage) -> Result<Option<String>, QrError> {
        Ok(self.0.clone())
    }
}

#[cfg(feature = "qr-scan")]
pub use scanner::RqrrScanner;

#[cfg(feature = "qr-scan")]
mod scanner {
    use image::DynamicImage;
    use rqrr::PreparedImage;
    use tracing::debug;

    use super::QrScanner;
    use crate::error::QrError;

    /// Pure Rust QR scanner backed by `rqrr`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RqrrScanner;

    impl RqrrScanner {
        pub fn new() -> Self {
            Self
        }
    }

    impl QrScanner for RqrrScanner {
        fn scan(&self, image: &DynamicImage) -> Result<Option<String>, QrError> {
            let luma = image.to_luma8();
            let (w, h) = (luma.width() as usize, luma.height() as usize);

            let mut prepared =
                PreparedImage::prepare_from_greyscale(w, h, |x, y| luma.get_pixel(x as u32, y as u32)[0]);
            let grids = prepared.detect_grids();
            debug!("Detected {} QR grid(s) in {}x{} image", grids.len(), w, h);

            let mut last_error = None;
            for grid in grids {
                match grid.decode() {
                    Ok((_meta, content)) => return Ok(Some(content)),
                    Err(e) => last_error = Some(e.to_string()),
                }
            }

            match last_error {
                Some(e) => Err(QrError::Scan(e)),
                None => Ok(None),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_blank_image_has_no_qr() {
            let image = DynamicImage::new_luma8(64, 64);
            assert_eq!(RqrrScanner::new().scan(&image), Ok(None));
        }
    }
}
