//! Admin upload validation for product and specification images.
//!
//! The storefront does not decode or resize images itself; callers hand in
//! the dimensions and byte size they already know and get a validation
//! verdict with the concrete limits in the error message.

use crate::errors::{Error, Result};

/// Minimal accepted image dimensions in pixels (width, height).
pub const MIN_IMAGE_SIZE: (u32, u32) = (400, 400);

/// Maximal accepted upload size in megabytes.
pub const MAX_FILE_MEGABYTES: u64 = 10;

/// Metadata of an uploaded image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMeta {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// File size in bytes
    pub size_bytes: u64,
}

/// Validates an uploaded image against the size thresholds.
///
/// The file-size check runs before the dimension check, matching the order
/// uploads are rejected in the admin forms.
///
/// # Errors
/// Returns [`Error::FileTooLarge`] for files over [`MAX_FILE_MEGABYTES`],
/// or [`Error::ImageTooSmall`] for images under [`MIN_IMAGE_SIZE`].
pub fn validate_image(meta: ImageMeta) -> Result<()> {
    if meta.size_bytes > MAX_FILE_MEGABYTES << 20 {
        return Err(Error::FileTooLarge {
            size: meta.size_bytes,
            max_megabytes: MAX_FILE_MEGABYTES,
        });
    }

    let (min_width, min_height) = MIN_IMAGE_SIZE;
    if meta.width < min_width || meta.height < min_height {
        return Err(Error::ImageTooSmall {
            width: meta.width,
            height: meta.height,
            min_width,
            min_height,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_valid_image_accepted() {
        let meta = ImageMeta {
            width: 400,
            height: 400,
            size_bytes: 1024 * 1024,
        };
        assert!(validate_image(meta).is_ok());
    }

    #[test]
    fn test_small_image_rejected_with_limits_in_message() {
        let meta = ImageMeta {
            width: 300,
            height: 300,
            size_bytes: 1024,
        };
        let err = validate_image(meta).unwrap_err();
        assert!(matches!(err, Error::ImageTooSmall { .. }));
        assert!(err.to_string().contains("400x400"));
    }

    #[test]
    fn test_one_dimension_too_small_rejected() {
        let meta = ImageMeta {
            width: 800,
            height: 399,
            size_bytes: 1024,
        };
        assert!(matches!(
            validate_image(meta),
            Err(Error::ImageTooSmall { .. })
        ));
    }

    #[test]
    fn test_oversized_file_rejected_with_limit_in_message() {
        let meta = ImageMeta {
            width: 800,
            height: 800,
            size_bytes: (10 << 20) + 1,
        };
        let err = validate_image(meta).unwrap_err();
        assert!(matches!(err, Error::FileTooLarge { .. }));
        assert!(err.to_string().contains("10 MB"));
    }

    #[test]
    fn test_file_size_checked_before_dimensions() {
        let meta = ImageMeta {
            width: 1,
            height: 1,
            size_bytes: 11 << 20,
        };
        assert!(matches!(
            validate_image(meta),
            Err(Error::FileTooLarge { .. })
        ));
    }
}
