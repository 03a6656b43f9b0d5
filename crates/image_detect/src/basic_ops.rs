// Basic image operations: grayscale, blur, saving.

use image::{DynamicImage, GrayImage, Luma, RgbImage};
use imageproc::filter::gaussian_blur_f32;

use crate::error::{ProcessError, Result};

fn pixel_to_grayscale(p: &[u8]) -> u8 {
    ((p[0] as f64 * 0.299) + (p[1] as f64 * 0.587) + (p[2] as f64 * 0.114)) as u8
}

/// Convert RGB pixels to a single-channel luma image.
pub fn grayscale(image: &RgbImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut out = GrayImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels() {
        out.put_pixel(x, y, Luma([pixel_to_grayscale(&pixel.0)]));
    }

    out
}

/// Gaussian blur; a non-positive sigma leaves the image unchanged.
pub fn blur(gray: &GrayImage, sigma: f32) -> GrayImage {
    if sigma <= 0.0 {
        return gray.clone();
    }
    gaussian_blur_f32(gray, sigma)
}

/// Grayscale then blur, the common first step of both detectors.
pub fn preprocess(image: &RgbImage, sigma: f32) -> GrayImage {
    blur(&grayscale(image), sigma)
}

/// Write `image` to `path`, picking the format from the file extension.
pub fn save_image(image: &DynamicImage, path: &str) -> Result<()> {
    image
        .save(path)
        .map_err(|source| ProcessError::ImageWriteFailed {
            path: path.to_string(),
            source,
        })
}
